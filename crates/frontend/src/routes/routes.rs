//! View table - maps a location to the component rendered in the content area.

use crate::pages::Home;
use crate::routes::registry::{registry, ROOT_PATH};
use leptos::prelude::*;

type ViewFn = fn() -> AnyView;

fn home_view() -> AnyView {
    view! { <Home /> }.into_any()
}

/// Paths with a bound view. Registered routes missing here render nothing.
const VIEWS: &[(&str, ViewFn)] = &[(ROOT_PATH, home_view)];

fn bound_view(path: &str) -> Option<ViewFn> {
    VIEWS.iter().find(|(p, _)| *p == path).map(|(_, f)| *f)
}

/// Whether `path` has a view bound to it.
pub fn has_view(path: &str) -> bool {
    bound_view(path).is_some()
}

/// Renders the view bound to `path`.
///
/// Registered routes without a view and unknown paths render an empty content
/// area, the shell keeps working.
pub fn render_route(path: &str) -> AnyView {
    match bound_view(path) {
        Some(render) => render(),
        None => {
            if registry().find(path).is_some() {
                log::debug!("no view bound to route '{}'", path);
            } else {
                log::debug!("unknown location '{}'", path);
            }
            ().into_any()
        }
    }
}

/// Content area. Re-renders when `location` changes.
#[component]
pub fn AppRoutes(#[prop(into)] location: Signal<String>) -> impl IntoView {
    view! {
        <div class="content">
            {move || location.with(|path| render_route(path))}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_only_root_is_bound() {
        let bound: Vec<&str> = registry()
            .routes()
            .iter()
            .map(|r| r.path)
            .filter(|p| has_view(p))
            .collect();
        assert_eq!(bound, vec!["/"]);
        assert!(!has_view("twitchbot"));
        assert!(!has_view("nowhere"));
    }

    #[test]
    fn test_render_route_never_panics() {
        let owner = Owner::new();
        owner.with(|| {
            for route in registry().routes() {
                let _view = render_route(route.path);
            }
            let _view = render_route("nowhere");
            let _view = render_route("");
        });
        owner.cleanup();
    }
}
