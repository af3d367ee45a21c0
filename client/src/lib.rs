//! # client
//!
//! Leptos frontend for the DentMart storefront.
//!
//! This crate contains the landing page and its components, the persisted
//! auth store, and the HTTP client wrapper that talks to the proxy routes
//! served by the `dentmart` binary.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
