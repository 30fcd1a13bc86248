//! Deployment environments

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A deployment tier whose settings overlay the base and agency defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Qa,
    Staging,
    Sandbox,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 5] = [
        Environment::Development,
        Environment::Qa,
        Environment::Staging,
        Environment::Sandbox,
        Environment::Production,
    ];

    /// Key used under `environments` in config documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Qa => "qa",
            Environment::Staging => "staging",
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownEnvironment { value: s.trim().to_string() })
    }
}

/// Which environment the caller wants: a named one, or whatever the runtime
/// context says (`current`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentSelection {
    #[default]
    Current,
    Explicit(Environment),
}

impl From<Environment> for EnvironmentSelection {
    fn from(env: Environment) -> Self {
        EnvironmentSelection::Explicit(env)
    }
}

impl FromStr for EnvironmentSelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("current") {
            return Ok(EnvironmentSelection::Current);
        }
        s.parse().map(EnvironmentSelection::Explicit)
    }
}

impl fmt::Display for EnvironmentSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentSelection::Current => f.write_str("current"),
            EnvironmentSelection::Explicit(env) => env.fmt(f),
        }
    }
}
