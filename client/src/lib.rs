//! # client
//!
//! Leptos + WASM frontend for the campus school-administration application.
//!
//! This crate contains pages, reusable components, application state, and
//! REST helpers. Pages own all mutable state; components are pure render
//! functions over `Signal` props plus output callbacks.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Hydration entry point invoked from the browser after the WASM bundle loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
