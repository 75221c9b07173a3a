//! # client
//!
//! Leptos + WASM frontend for the Imsdly marketing site and account pages.
//!
//! Pages render static marketing content; identity-dependent views attach a
//! session mirror from the `session` crate and gate rendering on it. The
//! `hydrate` feature builds the browser bundle, `ssr` the server-side shell.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
