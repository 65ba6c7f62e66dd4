pub mod app;
pub mod config;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod store;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = config::UiConfig::from_window();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level.into());
    console_error_panic_hook::set_once();

    if let Some(err) = config_error {
        log::warn!("falling back to default config: {}", err);
    }

    let navigator = app::browser_navigator();
    routes::listen_popstate(navigator.clone());
    log::info!("starting at '{}'", navigator.current());

    leptos::mount::mount_to_body(move || leptos::view! { <app::App navigator=navigator.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
