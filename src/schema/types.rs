//! Typed view of the composed console configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The canonical configuration consumed by the console.
///
/// Unknown keys are rejected at every level, so a merged document that
/// drifted from the base documents fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AirportConfig {
    pub agency: AgencyInfo,
    pub server_url: ServerUrls,
    pub auth: AuthSettings,
    pub theme: Theme,
    pub provider: ProviderSettings,
    pub map: MapSettings,
    pub features: BTreeMap<String, bool>,
    pub app: AppSettings,
    pub airport: AirportInfo,
    pub dashboard: DashboardSettings,
}

impl AirportConfig {
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgencyInfo {
    pub key: String,
    pub name: String,
    pub short_name: String,
    pub timezone: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerUrls {
    pub config: String,
    pub mds: String,
    pub audit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthSettings {
    pub domain: String,
    pub client_id: String,
    pub audience: String,
    pub redirect_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteColor {
    pub main: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProviderSettings {
    pub active_providers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MapSettings {
    pub style_url: String,
    pub access_token: String,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppSettings {
    pub title: String,
    pub base_path: String,
    pub refresh_interval_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AirportInfo {
    pub code: String,
    pub name: String,
    pub geofence_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DashboardSettings {
    pub default_range_days: u32,
    pub event_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{config_set, Agency, App};
    use crate::domain::Environment;

    #[test]
    fn test_lawa_production_typed_view() {
        let merged = config_set(Agency::Lawa, App::OpenAirport)
            .merge_with_overlays(Environment::Production, &[])
            .unwrap();
        let config: AirportConfig = merged.to_typed().unwrap();

        assert_eq!(config.airport.code, "LAX");
        assert_eq!(config.agency.short_name, "LAWA");
        assert_eq!(config.theme.palette.primary.main, "#003b71");
        assert_eq!(config.theme.palette.secondary.main, "#f5a623");
        assert_eq!(config.map.center, [-118.4085, 33.9416]);
        assert_eq!(config.dashboard.default_range_days, 30);
        assert!(!config.feature_enabled("csvExport"));
        assert!(config.feature_enabled("tripMap"));
        assert!(!config.feature_enabled("doesNotExist"));
    }

    #[test]
    fn test_development_overlays_apply_per_document() {
        let merged = config_set(Agency::Demo, App::OpenAirport)
            .merge_with_overlays(Environment::Development, &[])
            .unwrap();
        let config: AirportConfig = merged.to_typed().unwrap();

        // The app base overlay sets the refresh interval; the agency document
        // later overrides the base-common development server URLs.
        assert_eq!(config.app.refresh_interval_seconds, 15);
        assert_eq!(config.server_url.config, "https://demo.open-airport.example.com/config");
        assert_eq!(config.auth.client_id, "oa-console-development");
    }
}
