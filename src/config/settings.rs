//! Settings: which agency/app to compose and which local overrides to apply

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Settings file looked up from the working directory when none is given.
pub const SETTINGS_FILE: &str = "open-airport.toml";

const ENV_PREFIX: &str = "OPEN_AIRPORT_";

/// Selects the agency by key.
pub const AGENCY_VAR: &str = "OPEN_AIRPORT_AGENCY";

/// Selects the app by key.
pub const APP_VAR: &str = "OPEN_AIRPORT_APP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    pub app: String,
    /// Extra documents merged above the agency documents, in order. Relative
    /// paths are resolved against the settings file's directory.
    pub overlays: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { agency: None, app: "open-airport".to_string(), overlays: Vec::new() }
    }
}

impl Settings {
    /// Layer defaults, the settings file, then `OPEN_AIRPORT_AGENCY` /
    /// `OPEN_AIRPORT_APP`.
    ///
    /// An explicit `path` must exist; the default file is optional and only
    /// read from the working directory, never from its parents.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "settings file not found"),
                });
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(SETTINGS_FILE),
        };

        let mut settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file_exact(&file))
            .merge(Env::prefixed(ENV_PREFIX).only(&["agency", "app"]))
            .extract()
            .map_err(Box::new)?;

        if let Some(dir) = file.parent() {
            for overlay in settings.overlays.iter_mut().filter(|p| p.is_relative()) {
                *overlay = dir.join(&*overlay);
            }
        }

        tracing::debug!(
            agency = settings.agency.as_deref().unwrap_or("<unset>"),
            app = %settings.app,
            overlays = settings.overlays.len(),
            "loaded settings"
        );
        Ok(settings)
    }
}
