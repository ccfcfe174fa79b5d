//! Application configuration

use std::env;
use std::net::SocketAddr;

use common::error::{Error, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind
    pub host: String,
    /// API port
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3333),
        }
    }
}

impl AppConfig {
    /// Create a new configuration from environment variables
    pub fn new() -> Self {
        Self::default()
    }

    /// Socket address to listen on, preferring an explicit override
    pub fn bind_addr(&self, addr_override: Option<&str>) -> Result<SocketAddr> {
        let addr = match addr_override {
            Some(addr) => addr.to_string(),
            None => format!("{}:{}", self.host, self.port),
        };

        addr.parse()
            .map_err(|e| Error::ConfigurationError(format!("Invalid listen address {}: {}", addr, e)))
    }
}
