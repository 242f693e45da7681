//! Build-time configuration for the console.
//!
//! The API base URL is baked in when the WASM bundle is built:
//! `CONSERJE_API_URL=https://api.example.com cargo leptos build`. Without it
//! the console calls `/api` on its own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Base URL of the REST backend.
pub fn api_base_url() -> &'static str {
    resolve_api_base_url(option_env!("CONSERJE_API_URL"))
}

fn resolve_api_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Client route paths with fixed meaning.
pub mod routes {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const UNAUTHORIZED: &str = "/unauthorized";
    /// Default landing page for authenticated users.
    pub const DASHBOARD: &str = "/dashboard";
}
