//! Domain layer for yamlconf
//!
//! This module contains the configuration value model and its error type.

pub mod error;
pub mod models;

// Re-export error types for convenient access
pub use error::ConfigError;
