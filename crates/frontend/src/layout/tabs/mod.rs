//! Tab bar
//!
//! - `state` - pure projection of the current location onto the route list
//! - `tab` - one link in the bar
//! - `tab_bar` - the `<ul>` wrapper

pub mod state;
pub mod tab;
pub mod tab_bar;

pub use state::{tab_states, TabState};
pub use tab::{is_in_app_click, Modifiers, TabLink};
pub use tab_bar::TabBar;
