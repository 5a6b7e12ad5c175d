//! # client
//!
//! Leptos + WASM frontend for SciFeed, a personalized research-paper feed.
//!
//! This crate contains the route pages, the subject-selection onboarding
//! screen, its state machine, and best-effort preference persistence over
//! browser `localStorage`. The `ssr` feature builds it for server rendering
//! inside the `scifeed` host; the `hydrate` feature builds the WASM bundle.

pub mod app;
pub mod components;
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
