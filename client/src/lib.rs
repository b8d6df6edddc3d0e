//! # adpanel-client
//!
//! Leptos frontend for the advertiser dashboard. Rendered on the server by
//! `adpanel-server` and hydrated in the browser.
//!
//! This crate contains the route guard, the dashboard shell, the persisted
//! settings store, the login/settings pages, and thin HTTP helpers for the
//! auth proxy exposed by the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
