//! # dog-gallery
//!
//! Leptos + WASM single-page gallery of dog breeds backed by the public
//! dog.ceo API. Cards can be liked, reset, given a fresh random image, and
//! filtered by name; a toggle switches between light and dark presentation.
//!
//! Layering, leaf first: `config` and `net` talk to the API, `services`
//! turns responses into breed records, `state` holds them, `controller`
//! reduces user intents into state changes, `render` projects state into card
//! view models, and `components`/`pages` draw them.
//!
//! Browser-only code is gated behind the `csr` feature; without it the crate
//! builds natively and every browser touch point is a no-op.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod render;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: wire up console logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
