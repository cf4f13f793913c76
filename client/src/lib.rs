//! # client
//!
//! Leptos + WASM frontend for the packaging recommendation dashboard.
//!
//! This crate holds the form, the prediction exchange, results state, and the
//! mapping from ranked materials to the `charts` crate's configs. Browser
//! wiring sits behind the `csr` feature; everything else builds and tests
//! natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logging unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
