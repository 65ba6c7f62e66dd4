//! Route registry - the single source of truth for the tab bar and the view table.
//!
//! Paths are stored in registry form: `/` for the root, a bare segment
//! (`twitchbot`) for everything else. Use [`normalize_pathname`] to bring a
//! browser pathname into that form and [`Route::href`] to go back.

use once_cell::sync::Lazy;
use thiserror::Error;

pub const ROOT_PATH: &str = "/";

/// One navigable section of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub label: &'static str,
}

impl Route {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }

    /// Absolute href used for links and history entries.
    pub fn href(&self) -> String {
        to_href(self.path)
    }
}

/// Declared order is the rendered order.
pub const ROUTES: &[Route] = &[
    Route::new(ROOT_PATH, "Home"),
    Route::new("http", "HTTP"),
    Route::new("twitchbot", "TwitchBot"),
    Route::new("stulbe", "Stulbe"),
    Route::new("streamlabs", "StreamLabs"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),
    #[error("route path must not be empty")]
    EmptyPath,
}

/// Insertion-ordered route table with unique paths.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<Route>,
}

impl RouteRegistry {
    pub fn new(entries: impl IntoIterator<Item = Route>) -> Result<Self, RegistryError> {
        let mut routes: Vec<Route> = Vec::new();
        for route in entries {
            if route.path.is_empty() {
                return Err(RegistryError::EmptyPath);
            }
            if routes.iter().any(|r| r.path == route.path) {
                return Err(RegistryError::DuplicatePath(route.path.to_string()));
            }
            routes.push(route);
        }
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// The tab to highlight for `location`. Exact match only: no prefixes, no wildcards.
    pub fn active(&self, location: &str) -> Option<&Route> {
        self.find(location)
    }

    pub fn is_active(&self, route: &Route, location: &str) -> bool {
        route.path == location
    }
}

static REGISTRY: Lazy<RouteRegistry> = Lazy::new(|| RouteRegistry {
    routes: ROUTES.to_vec(),
});

impl Default for RouteRegistry {
    fn default() -> Self {
        REGISTRY.clone()
    }
}

/// Application-wide registry built from [`ROUTES`].
pub fn registry() -> &'static RouteRegistry {
    &REGISTRY
}

/// `/twitchbot` -> `twitchbot`, `/` and `""` -> `/`.
pub fn normalize_pathname(pathname: &str) -> String {
    let trimmed = pathname.strip_prefix('/').unwrap_or(pathname);
    if trimmed.is_empty() {
        ROOT_PATH.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Registry-form path to an absolute href.
pub fn to_href(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
