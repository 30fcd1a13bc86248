//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

use crate::bootstrap::{bootstrap, AppContext};
use crate::config::Settings;
use crate::domain::EnvironmentSelection;
use crate::resolver::ProcessEnv;

/// Flags selecting which configuration to compose.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Agency key (overrides OPEN_AIRPORT_AGENCY and the settings file)
    #[arg(short, long, value_name = "KEY")]
    pub agency: Option<String>,

    /// App key (overrides OPEN_AIRPORT_APP and the settings file)
    #[arg(long, value_name = "KEY")]
    pub app: Option<String>,

    /// Deployment environment, or `current` to read OPEN_AIRPORT_ENV / RUN_MODE
    #[arg(short, long, value_name = "ENV")]
    pub env: Option<String>,

    /// Settings file (defaults to ./open-airport.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra override document applied after the agency documents (repeatable)
    #[arg(long = "overlay", value_name = "FILE")]
    pub overlays: Vec<PathBuf>,
}

impl SelectionArgs {
    /// Settings with command-line flags applied on top.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(agency) = &self.agency {
            settings.agency = Some(agency.clone());
        }
        if let Some(app) = &self.app {
            settings.app = app.clone();
        }
        settings.overlays.extend(self.overlays.iter().cloned());
        Ok(settings)
    }

    pub fn selection(&self) -> Result<Option<EnvironmentSelection>> {
        Ok(self.env.as_deref().map(str::parse::<EnvironmentSelection>).transpose()?)
    }

    pub fn bootstrap(&self) -> Result<AppContext> {
        let settings = self.settings()?;
        let selection = self.selection()?;
        bootstrap(&settings, selection, &ProcessEnv).context("failed to compose configuration")
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

/// Render a configuration value in `format`.
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Toml => toml::to_string_pretty(value)?,
    };
    Ok(rendered)
}

/// Strings print bare; everything else prints as JSON.
pub fn render_scalar(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}
