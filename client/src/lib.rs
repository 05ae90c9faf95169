//! # client
//!
//! Leptos + WASM frontend for the resume feedback page.
//!
//! This crate contains the single Submission View: form state, the one call
//! to the analysis endpoint, and the components that render the returned
//! feedback. The response model and every display decision come from the
//! `feedback` crate so they can be tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
