#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod card;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod modal;
pub mod page;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("couldn't initialize console logging: {e}");
    }
    leptos::mount::hydrate_body(App);
}
