//! Environment-driven server configuration.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "STOCKROOM_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a socket address like 127.0.0.1:8080 (got '{value}')")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = match lookup(BIND_ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => value,
            None => {
                tracing::warn!("{BIND_ADDR_VAR} not set; defaulting to {DEFAULT_BIND_ADDR}");
                DEFAULT_BIND_ADDR.to_string()
            }
        };

        let bind_addr = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw.clone(),
            })?;

        Ok(Self { bind_addr })
    }
}
