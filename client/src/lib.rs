//! # eikon-client
//!
//! Leptos + WASM frontend for the Eikon Partners marketing site.
//!
//! A single address serves every "page": the shell swaps page content from
//! in-memory state, adapts the navigation chrome to the active page and
//! scroll position, and drives the contact form through its submission
//! lifecycle.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("hydrating eikon site");
    leptos::mount::hydrate_body(app::App);
}
