//! Configuration types for the payroll service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the service YAML file. Every section has defaults,
//! so a file only needs the keys it overrides.

use serde::Deserialize;

/// Where the HTTP service listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// The `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "payroll_engine=info".to_string(),
        }
    }
}

/// The complete service configuration loaded from `service.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}
