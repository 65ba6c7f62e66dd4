pub mod tabs;

use crate::layout::tabs::{tab_states, TabBar, TabState};
use crate::routes::{use_navigator, AppRoutes, Navigator};
use leptos::prelude::*;

/// Location signal fed by `navigator`, plus the tab states derived from it.
///
/// The subscription is released when the current owner is cleaned up.
pub fn track_location(navigator: &Navigator) -> (RwSignal<String>, Memo<Vec<TabState>>) {
    let location = RwSignal::new(navigator.current());
    let subscription = navigator.subscribe(move |path| location.set(path.to_string()));
    on_cleanup(move || drop(subscription));

    let tabs = Memo::new(move |_| location.with(|path| tab_states(path)));
    (location, tabs)
}

/// Application shell: tab bar on top, routed content below.
///
/// ```text
/// +------------------------------------------+
/// |  Home | HTTP | TwitchBot | ...            |
/// +------------------------------------------+
/// |              content                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let navigator = use_navigator();
    let (location, tabs) = track_location(&navigator);

    view! {
        <div class="container">
            <TabBar tabs=tabs />
            <AppRoutes location=location />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn active_label(tabs: &[TabState]) -> Option<&'static str> {
        tabs.iter().find(|t| t.active).map(|t| t.route.label)
    }

    #[test]
    fn test_navigation_flows_into_tab_states() {
        let navigator = Navigator::new("/");
        let owner = Owner::new();
        owner.with(|| {
            let (location, tabs) = track_location(&navigator);
            assert_eq!(navigator.subscriber_count(), 1);
            assert_eq!(active_label(&tabs.get_untracked()), Some("Home"));

            navigator.navigate("twitchbot");
            assert_eq!(location.get_untracked(), "twitchbot");
            assert_eq!(active_label(&tabs.get_untracked()), Some("TwitchBot"));

            navigator.sync("settings");
            assert_eq!(active_label(&tabs.get_untracked()), None);
        });

        owner.cleanup();
        assert_eq!(navigator.subscriber_count(), 0);
        navigator.navigate("http");
    }
}
