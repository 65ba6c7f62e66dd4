pub mod history;
pub mod navigator;
pub mod registry;
pub mod routes;

pub use history::{current_location, listen_popstate, BrowserHistory, History};
pub use navigator::{Navigator, Subscription};
pub use registry::{registry, Route, RouteRegistry, ROUTES};
pub use routes::{render_route, AppRoutes};

use leptos::prelude::use_context;

/// Hook to access the navigator provided by `App`.
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator context not found")
}
