//! # assetdesk-client
//!
//! Leptos + WASM frontend for the asset administration dashboard.
//!
//! This crate holds the session lifecycle (credential store, auth state
//! container, login gateway), the access guard and route table, and the
//! pages rendered behind them. Record grids talk to the remote asset API
//! with the session's bearer token; the API itself lives elsewhere.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
