//! # client
//!
//! Leptos + WASM front-end for Wabisabi.
//!
//! Pages are bound to a static route table (`routes`). Before a page renders,
//! the navigation guard (`guard`) checks the route's sign-in and
//! email-verification requirements against the session held by the external
//! identity provider (`identity`), and redirects when they are not met.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod identity;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
