//! # inventory-admin
//!
//! Leptos + WASM front-end for the inventory admin. It signs the user in,
//! keeps the session across reloads through `localStorage`, and gates the
//! product and category views behind the shared `inventory-session` guard.
//!
//! Browser-only code sits behind the `csr` feature; without it the crate
//! builds natively with no-op stubs so its helpers can be unit-tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
