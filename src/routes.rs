//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR console, its compiled `/pkg` assets, and a health
//! check under a single Axum router. The REST backend the console talks to
//! is a separate service; this host never proxies it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

/// Leptos options as cargo-leptos exports them (from
/// `[[workspace.metadata.leptos]]`), with the site root override applied.
///
/// # Errors
///
/// Returns an error if the `LEPTOS_*` settings are missing or malformed.
pub fn leptos_options(config: &HostConfig) -> Result<LeptosOptions, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        options.site_root = root.as_str().into();
    }
    Ok(options)
}

/// Directory serving the compiled WASM, JS and CSS bundle.
pub(crate) fn pkg_dir(site_root: &str) -> PathBuf {
    Path::new(site_root).join("pkg")
}

/// SSR console + `/pkg` assets + `/healthz`.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg = pkg_dir(&leptos_options.site_root);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
