use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading or interpreting a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Nothing exists at the requested path
    #[error("Config file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The path exists but could not be read as text
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The contents are not a single well-formed YAML document
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path whose contents failed to parse
        path: PathBuf,
        /// Parser diagnostic with location
        #[source]
        source: serde_yaml::Error,
    },

    /// Typed extraction did not match the document
    #[error("Configuration does not match the requested type: {0}")]
    Deserialize(#[source] serde_yaml::Error),
}

impl ConfigError {
    /// Whether the target file was missing at load time
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The file this error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } | Self::Parse { path, .. } => {
                Some(path)
            }
            Self::Deserialize(_) => None,
        }
    }
}
