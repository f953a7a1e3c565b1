//! # client
//!
//! Leptos + WASM single-page frontend for the hotel booking app.
//!
//! This crate owns pages, components, and the browser adapters that plug
//! `localStorage`, `window.location`, and fetch into the `session` crate.
//! Session, routing decisions, validation, and REST calls live in `session`
//! so they can be tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    leptos::mount::mount_to_body(app::App);
}
