//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Default bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ORACLE_API_ADDR` | Server bind address | `127.0.0.1:8787` |
    ///
    /// Upstream credentials are read separately by
    /// [`AppState::from_env`](crate::state::AppState::from_env).
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ORACLE_API_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        Ok(Self { addr })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ORACLE_API_ADDR format")]
    InvalidAddr,
}
