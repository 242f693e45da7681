//! Host configuration parsed from environment variables.
//!
//! Leptos build options (output name, site root, reload port) come from
//! `[[workspace.metadata.leptos]]` via cargo-leptos; only the deploy-time
//! overrides live here.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': expected an integer in 1..=65535")]
    InvalidPort { value: String },
    #[error("empty CONSERJE_SITE_ROOT")]
    EmptySiteRoot,
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` (where `pkg/` lives) when set.
    pub site_root: Option<String>,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `CONSERJE_SITE_ROOT`: directory holding the compiled `pkg/` assets
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("CONSERJE_SITE_ROOT").ok().as_deref(),
        )
    }

    pub(crate) fn from_values(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { port: parse_port(port)?, site_root: parse_site_root(site_root)? })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}

fn parse_site_root(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some("") => Err(ConfigError::EmptySiteRoot),
        Some(path) => Ok(Some(path.trim_end_matches('/').to_owned())),
    }
}
