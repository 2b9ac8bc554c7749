//! # client
//!
//! Leptos + WASM frontend for the math equation solver.
//!
//! This crate contains the solver page, its components, the reducer-driven
//! view state, the `/solve` network helper, and the math segment lexer that
//! feeds the KaTeX bridge. The `mathsnap` host renders it with `ssr` and the
//! browser hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
