use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::domain::error::ConfigError;

/// A parsed configuration document
///
/// Wraps the generic YAML value tree: scalars (string, number, boolean,
/// null), mappings and sequences. The top-level value is not required to be
/// a mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Value);

impl Configuration {
    /// Wrap an already-decoded value
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying value tree
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the configuration, returning the underlying value tree
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Whether the document root is a mapping
    pub fn is_mapping(&self) -> bool {
        self.0.is_mapping()
    }

    /// Look up a top-level key
    ///
    /// Returns `None` if the key is absent or the root is not a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_mapping()?.get(key)
    }

    /// Look up a nested value by a dotted path such as `server.port` or
    /// `features.0`
    ///
    /// Numeric segments index into sequences. On mappings a segment is tried
    /// as a string key first, then as an integer key.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.0, |current, segment| {
            step(untag(current), segment)
        })
    }

    /// Deserialize the document into a caller-defined type
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        serde_yaml::from_value(self.0.clone()).map_err(ConfigError::Deserialize)
    }
}

impl FromStr for Configuration {
    type Err = serde_yaml::Error;

    /// Decode a single YAML document into plain data values
    ///
    /// Input without a document (empty, comments only, a bare `---`) yields
    /// null. Merge keys (`<<: *anchor`) are resolved into the enclosing
    /// mapping.
    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        if contents.trim().is_empty() {
            return Ok(Self(Value::Null));
        }
        let mut value: Value = serde_yaml::from_str(contents)?;
        value.apply_merge()?;
        Ok(Self(value))
    }
}

impl From<Value> for Configuration {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Configuration> for Value {
    fn from(config: Configuration) -> Self {
        config.0
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Mapping(map) => map.get(segment).or_else(|| {
            let key: i64 = segment.parse().ok()?;
            map.get(Value::from(key))
        }),
        Value::Sequence(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}
