//! Configuration file loading
//!
//! Reads a single YAML document from disk into a [`Configuration`]:
//! - Default path resolution
//! - Missing-file detection
//! - Parser diagnostics carried through [`ConfigError`]
//!
//! [`Configuration`]: crate::domain::models::Configuration
//! [`ConfigError`]: crate::domain::error::ConfigError

pub mod loader;

pub use loader::{load_config, ConfigLoader, DEFAULT_CONFIG_PATH};
