use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

use super::navigator::Navigator;
use super::registry::normalize_pathname;

/// Sink for user-initiated navigations.
pub trait History: Send + Sync {
    /// New entry on top of the stack.
    fn push(&self, href: &str);
    /// Overwrites the current entry.
    fn replace(&self, href: &str);
}

/// `window.history` backed implementation.
///
/// Holds no JS handles, the window is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn push(&self, href: &str) {
        with_browser_history(href, |history| {
            history.push_state_with_url(&JsValue::NULL, "", Some(href))
        });
    }

    fn replace(&self, href: &str) {
        with_browser_history(href, |history| {
            history.replace_state_with_url(&JsValue::NULL, "", Some(href))
        });
    }
}

fn with_browser_history<F>(href: &str, f: F)
where
    F: FnOnce(&web_sys::History) -> Result<(), JsValue>,
{
    let Some(w) = window() else {
        log::warn!("history update skipped, no window: '{}'", href);
        return;
    };
    match w.history() {
        Ok(history) => {
            if let Err(err) = f(&history) {
                log::error!("history update failed for '{}': {:?}", href, err);
            }
        }
        Err(err) => log::error!("window.history unavailable: {:?}", err),
    }
}

/// Current browser pathname in registry form, `/` when unavailable.
pub fn current_location() -> String {
    let pathname = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    normalize_pathname(&pathname)
}

/// Feeds back/forward navigation into the navigator.
///
/// The listener lives as long as the page; it is registered once at startup.
pub fn listen_popstate(navigator: Navigator) {
    let Some(w) = window() else {
        log::warn!("popstate listener not installed, no window");
        return;
    };
    let on_popstate = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
        navigator.sync(&current_location());
    });
    if let Err(err) =
        w.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
    {
        log::error!("failed to add popstate listener: {:?}", err);
        return;
    }
    on_popstate.forget();
}
