pub mod api;
pub mod app;
pub mod card;
pub mod clipboard;
pub mod components;
pub mod error;
pub mod feed;
pub mod logging;
pub mod model;
pub mod pages;
pub mod session;
#[cfg(feature = "ssr")]
pub mod server;
#[cfg(test)]
mod test_clock;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    logging::init_browser_logging();
    leptos::mount::hydrate_body(app::App);
}
