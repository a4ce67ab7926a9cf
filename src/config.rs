//! Host server configuration parsed from environment variables.

use std::net::SocketAddr;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid LISTEN_ADDR '{value}': {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    /// Overrides the Leptos `site-root` (where `/pkg` assets are served from).
    pub site_root: Option<String>,
    /// Launch the default browser on startup. The auth link is logged either way.
    pub open_browser: bool,
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `LISTEN_ADDR`: default `127.0.0.1:8080`
    /// - `SITE_ROOT`: Leptos site root from `Cargo.toml` when absent
    /// - `OPEN_BROWSER`: default `true`; unrecognised values keep the default
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("LISTEN_ADDR")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidListenAddr { value: raw_addr.clone(), source })?;

        let site_root = lookup("SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());

        let open_browser = lookup("OPEN_BROWSER").and_then(|v| parse_bool(&v)).unwrap_or(true);

        Ok(Self { listen_addr, site_root, open_browser })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
