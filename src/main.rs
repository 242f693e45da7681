mod config;
mod routes;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    // Missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "conserje host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let leptos_options = routes::leptos_options(&config)?;
    tracing::info!(site_root = %leptos_options.site_root, "leptos options loaded");

    let app = routes::app(leptos_options);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "conserje listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
