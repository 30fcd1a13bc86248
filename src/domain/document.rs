//! Config documents: nested settings plus per-environment overlays

use serde_json::{Map, Value};

use super::Environment;
use crate::error::{ConfigError, Result};

/// Reserved top-level key holding per-environment partial documents.
pub const ENVIRONMENTS_KEY: &str = "environments";

/// Marker for keys that exist in a base document but have no sensible default.
pub const PLACEHOLDER: &str = "UNDEFINED";

/// A nested settings mapping, labelled with where it came from.
///
/// Documents are never mutated once built; the merge engine only clones out of
/// them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigDocument {
    origin: String,
    fields: Map<String, Value>,
}

impl ConfigDocument {
    pub fn new(origin: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self { origin: origin.into(), fields }
    }

    pub fn from_toml_str(origin: impl Into<String>, text: &str) -> Result<Self> {
        let origin = origin.into();
        match toml::from_str::<Map<String, Value>>(text) {
            Ok(fields) => Ok(Self { origin, fields }),
            Err(source) => Err(ConfigError::Toml { origin, source }),
        }
    }

    pub fn from_yaml_str(origin: impl Into<String>, text: &str) -> Result<Self> {
        let origin = origin.into();
        // An empty YAML file is an empty document, not an error.
        match serde_yaml::from_str::<Option<Map<String, Value>>>(text) {
            Ok(fields) => Ok(Self { origin, fields: fields.unwrap_or_default() }),
            Err(source) => Err(ConfigError::Yaml { origin, source }),
        }
    }

    pub fn from_json_str(origin: impl Into<String>, text: &str) -> Result<Self> {
        let origin = origin.into();
        match serde_json::from_str::<Map<String, Value>>(text) {
            Ok(fields) => Ok(Self { origin, fields }),
            Err(source) => Err(ConfigError::Json { origin, source }),
        }
    }

    /// Where this document came from (embedded path or file on disk).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// All top-level fields, `environments` included.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Top-level fields other than `environments`.
    pub fn base_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter().filter(|(key, _)| key.as_str() != ENVIRONMENTS_KEY)
    }

    /// The `environments` mapping, if the document declares one.
    pub fn environments(&self) -> Result<Option<&Map<String, Value>>> {
        match self.fields.get(ENVIRONMENTS_KEY) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => {
                Err(ConfigError::MalformedEnvironments { document: self.origin.clone() })
            }
        }
    }

    /// The partial document declared for `env`, if any.
    pub fn overlay(&self, env: Environment) -> Result<Option<&Map<String, Value>>> {
        let Some(environments) = self.environments()? else {
            return Ok(None);
        };
        match environments.get(env.as_str()) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(ConfigError::MalformedOverlay {
                document: self.origin.clone(),
                environment: env.to_string(),
            }),
        }
    }

    /// Clone out the document's own fields and its `env` fragment, ready to be
    /// merged. A missing fragment is empty; a nested `environments` key inside
    /// a fragment is dropped.
    pub fn split(&self, env: Environment) -> Result<(Map<String, Value>, Map<String, Value>)> {
        let rest: Map<String, Value> =
            self.base_fields().map(|(key, value)| (key.clone(), value.clone())).collect();

        let mut fragment = self.overlay(env)?.cloned().unwrap_or_default();
        if fragment.remove(ENVIRONMENTS_KEY).is_some() {
            tracing::warn!(
                document = %self.origin,
                environment = %env,
                "ignoring nested `environments` inside an environment overlay"
            );
        }

        Ok((rest, fragment))
    }

    /// Return a copy whose `environments` are `defaults` overlaid with the
    /// document's own declarations.
    pub fn with_environment_defaults(&self, defaults: Map<String, Value>) -> Result<Self> {
        let mut environments = Value::Object(defaults);
        if let Some(own) = self.environments()? {
            crate::merge::deep_merge(&mut environments, Value::Object(own.clone()));
        }

        let mut fields = self.fields.clone();
        fields.insert(ENVIRONMENTS_KEY.to_string(), environments);
        Ok(Self { origin: self.origin.clone(), fields })
    }
}
