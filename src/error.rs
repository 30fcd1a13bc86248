//! Error types for configuration composition

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::ConformanceIssue;

/// Everything that can stop a configuration from being composed.
///
/// All of these are startup errors: nothing retries or reloads.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to resolve the deployment environment: set {app_var} or {mode_var}")]
    UnresolvedEnvironment { app_var: &'static str, mode_var: &'static str },

    #[error(
        "unknown environment '{value}' (expected one of: development, qa, staging, sandbox, production)"
    )]
    UnknownEnvironment { value: String },

    #[error("no agency configured: set {var} or `agency` in the settings file")]
    MissingAgency { var: &'static str },

    #[error("unknown agency '{key}' (registered: {registered})")]
    UnknownAgency { key: String, registered: String },

    #[error("unknown app '{key}' (registered: {registered})")]
    UnknownApp { key: String, registered: String },

    #[error("`environments` in {document} must be a table keyed by environment name")]
    MalformedEnvironments { document: String },

    #[error("environment overlay `{environment}` in {document} must be a table")]
    MalformedOverlay { document: String, environment: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid YAML in {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported document extension '.{extension}' for {}", path.display())]
    UnsupportedFormat { extension: String, path: PathBuf },

    #[error(
        "{count} configuration key(s) do not match the base documents:\n{listing}",
        count = issues.len(),
        listing = render_issues(issues)
    )]
    Nonconforming { issues: Vec<ConformanceIssue> },

    #[error("merged configuration does not match the schema: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("invalid settings: {0}")]
    Settings(#[from] Box<figment::Error>),
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

fn render_issues(issues: &[ConformanceIssue]) -> String {
    issues.iter().map(|issue| format!("  - {issue}")).collect::<Vec<_>>().join("\n")
}
