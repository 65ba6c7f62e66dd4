use crate::layout::Shell;
use crate::routes::{current_location, BrowserHistory, Navigator};
use crate::store::ApiStore;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App(navigator: Navigator) -> impl IntoView {
    // The `api` partition for the whole app. Rendering code only reads it.
    provide_context(ApiStore::new());

    provide_context(navigator);

    view! {
        <Shell />
    }
}

/// Navigator seeded from the browser location and pushing to `window.history`.
pub fn browser_navigator() -> Navigator {
    Navigator::with_history(current_location(), Arc::new(BrowserHistory))
}
