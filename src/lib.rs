//! yamlconf - YAML configuration loading
//!
//! Reads a YAML file from disk and decodes it into a generic, dynamically
//! typed value tree owned by the caller.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the `Configuration` value model and `ConfigError`
//! - **Infrastructure Layer** (`infrastructure`): filesystem-backed loading
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let config = yamlconf::load_config(Some(Path::new("configs/default.yaml")))?;
//! if let Some(port) = config.get_path("server.port") {
//!     println!("port = {port:?}");
//! }
//! # Ok::<(), yamlconf::ConfigError>(())
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::error::ConfigError;
pub use domain::models::Configuration;
pub use infrastructure::config::{load_config, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use serde_yaml::Value;
