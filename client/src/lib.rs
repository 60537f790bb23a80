//! # client
//!
//! Leptos + WASM frontend for the RWA portal: asset registration,
//! verification tracking, loan repayment and wallet connection.
//!
//! Domain logic (wizard state machine, image intake, status display
//! mapping, loan math) lives in `state`, `util` and the pure helpers next
//! to each component, so it is unit-tested natively without a browser.
//! Browser-only code is gated behind the `hydrate` feature.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
