//! The composed, read-only configuration

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{Environment, PLACEHOLDER};
use crate::error::{ConfigError, Result};
use crate::utils::keypath;

/// Result of merging a stack of documents for one environment.
///
/// Only shared access is exposed; a new value is built for a new selection.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    environment: Environment,
    fields: Map<String, Value>,
}

impl MergedConfig {
    pub(crate) fn new(environment: Environment, fields: Map<String, Value>) -> Self {
        Self { environment, fields }
    }

    /// The environment whose overlays were applied.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Look up a dotted key path such as `theme.palette.primary.main`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        keypath::lookup(&self.fields, path)
    }

    /// Dotted paths of every leaf still holding the placeholder marker.
    pub fn placeholders(&self) -> Vec<String> {
        let mut found = Vec::new();
        collect_placeholders(&self.fields, "", &mut found);
        found
    }

    /// Decode into a typed view.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.to_value()).map_err(ConfigError::Schema)
    }
}

fn collect_placeholders(map: &Map<String, Value>, prefix: &str, found: &mut Vec<String>) {
    for (key, value) in map {
        let path = keypath::join(prefix, key);
        match value {
            Value::Object(child) => collect_placeholders(child, &path, found),
            Value::String(s) if s == PLACEHOLDER => found.push(path),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if matches!(item, Value::String(s) if s == PLACEHOLDER) {
                        found.push(format!("{path}[{index}]"));
                    }
                }
            }
            _ => {}
        }
    }
}
