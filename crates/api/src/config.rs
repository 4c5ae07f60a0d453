//! API server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MARKETPLACE_HOST` - Bind address (default: 0.0.0.0)
//! - `MARKETPLACE_PORT` - Listen port (default: 3000)
//! - `MARKETPLACE_CORS_ORIGINS` - Comma-separated allowed origins
//!   (default: `http://localhost:8080,http://127.0.0.1:8080,null`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:8080", "http://127.0.0.1:8080", "null"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origins allowed to make credentialed cross-origin requests
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS
                .iter()
                .copied()
                .map(HeaderValue::from_static)
                .collect(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("MARKETPLACE_HOST") {
            config.host = host
                .trim()
                .parse()
                .map_err(|e| invalid("MARKETPLACE_HOST", e))?;
        }

        if let Some(port) = lookup("MARKETPLACE_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| invalid("MARKETPLACE_PORT", e))?;
        }

        if let Some(origins) = lookup("MARKETPLACE_CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(|o| {
                    HeaderValue::from_str(o).map_err(|e| invalid("MARKETPLACE_CORS_ORIGINS", e))
                })
                .collect::<Result<_, _>>()?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn invalid(var: &str, err: impl core::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(var.to_string(), err.to_string())
}
