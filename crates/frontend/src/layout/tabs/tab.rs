use crate::layout::tabs::TabState;
use crate::routes::use_navigator;
use leptos::ev;
use leptos::prelude::*;

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn from_event(ev: &ev::MouseEvent) -> Self {
        Self {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        }
    }

    pub fn any(&self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt
    }
}

/// Only plain primary-button clicks stay in the app. The rest (new tab,
/// new window, download) are left to the browser.
pub fn is_in_app_click(button: i16, modifiers: Modifiers) -> bool {
    button == 0 && !modifiers.any()
}

#[component]
pub fn TabLink(tab: TabState) -> impl IntoView {
    let navigator = use_navigator();
    let route = tab.route;

    let on_click = move |ev: ev::MouseEvent| {
        if !is_in_app_click(ev.button(), Modifiers::from_event(&ev)) {
            return;
        }
        ev.prevent_default();
        navigator.navigate(route.path);
    };

    view! {
        <li class=("is-active", tab.active)>
            <a href=route.href() on:click=on_click>{route.label}</a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_primary_click_is_handled() {
        assert!(is_in_app_click(0, Modifiers::default()));
    }

    #[test]
    fn test_modified_clicks_go_to_browser() {
        let cases = [
            Modifiers { ctrl: true, ..Default::default() },
            Modifiers { meta: true, ..Default::default() },
            Modifiers { shift: true, ..Default::default() },
            Modifiers { alt: true, ..Default::default() },
        ];
        for modifiers in cases {
            assert!(!is_in_app_click(0, modifiers), "{:?}", modifiers);
        }
    }

    #[test]
    fn test_other_buttons_go_to_browser() {
        assert!(!is_in_app_click(1, Modifiers::default()));
        assert!(!is_in_app_click(2, Modifiers::default()));
    }
}
