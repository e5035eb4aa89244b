//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Environment variable naming the configuration file to load.
pub const CONFIG_PATH_ENV: &str = "PAYROLL_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed keys (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<ServiceConfig>(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Loads the file named by `PAYROLL_CONFIG`, or the default path.
    pub fn from_env() -> EngineResult<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }

    /// The file the configuration was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/service.yaml"
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.yaml", name, uuid::Uuid::new_v4()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().server.port, 8000);
        assert_eq!(loader.config().server.host, "0.0.0.0");
        assert!(loader.config().logging.filter.contains("payroll_engine"));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path/service.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp("invalid", "server:\n  port: not-a-number\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("invalid"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = write_temp("partial", "server:\n  port: 9090\n");
        let loader = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loader.config().server.port, 9090);
        assert_eq!(loader.config().server.host, "0.0.0.0");
        assert_eq!(loader.config().logging, Default::default());
        assert_eq!(loader.config().server.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn test_loader_remembers_path() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.path(), Path::new(config_path()));
    }
}
