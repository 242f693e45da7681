//! # client
//!
//! Leptos + WASM administrative console for a residential building.
//!
//! This crate holds the session and authorization gate in front of every
//! console page: the persisted session repository, the auth phase machine,
//! the REST client with centralized 401 handling, route guards, and the app
//! shell, plus the login, dashboard and section pages they protect.

pub mod app;
pub mod auth_context;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    log::info!("conserje console hydrating");
    leptos::mount::hydrate_body(app::App);
}
