use std::fs;
use std::path::Path;

use serde_yaml::Mapping;
use tracing::{debug, warn};

use crate::domain::error::ConfigError;
use crate::domain::models::config::Configuration;

/// Path read when the caller does not supply one, relative to the working
/// directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/default.yaml";

/// Load a configuration file, falling back to [`DEFAULT_CONFIG_PATH`]
pub fn load_config(path: Option<&Path>) -> Result<Configuration, ConfigError> {
    ConfigLoader::load(path)
}

/// Reads YAML configuration documents from disk
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_PATH`] when
    /// `None`
    pub fn load(path: Option<&Path>) -> Result<Configuration, ConfigError> {
        Self::load_from_file(path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH)))
    }

    /// Load configuration from a specific file
    ///
    /// Fails with [`ConfigError::NotFound`] if nothing exists at `path`,
    /// [`ConfigError::Read`] if it cannot be read as text, and
    /// [`ConfigError::Parse`] if the contents are not a single well-formed
    /// YAML document.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");

        let result = Self::read_and_parse(path);
        match &result {
            Ok(config) => debug!(
                path = %path.display(),
                top_level_keys = config.as_value().as_mapping().map_or(0, Mapping::len),
                "configuration loaded"
            ),
            Err(err) => warn!(path = %path.display(), error = %err, "failed to load configuration"),
        }
        result
    }

    fn read_and_parse(path: &Path) -> Result<Configuration, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        // The handle is closed before parsing starts.
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        contents.parse::<Configuration>().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
