//! Configuration loading for the payroll service.
//!
//! The statutory rate tables are compiled into the engine; this module only
//! covers how the service runs: its listen address and log filter.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Binding {}", config.config().server.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{LoggingConfig, ServerConfig, ServiceConfig};
