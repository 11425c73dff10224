//! # portfolio-ui
//!
//! Leptos + WASM interactivity for a static personal-portfolio site: a
//! contact form with inline validation and a timed submission sequence, and
//! a projects gallery with category filters, a detail modal, and staggered
//! scroll-reveal.
//!
//! State lives in plain structs (`state`) that components render from
//! context, so every behavior is testable natively. Browser glue is gated
//! behind the `csr` feature.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
