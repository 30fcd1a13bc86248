//! One-shot startup composition
//!
//! `bootstrap` is the only place a merged configuration is built. It returns an
//! `AppContext` that callers hand to whatever needs configuration.

use crate::config::{Settings, AGENCY_VAR};
use crate::documents::{config_set, load_documents, Agency, App};
use crate::domain::{Environment, EnvironmentSelection, MergedConfig};
use crate::error::{ConfigError, Result};
use crate::resolver::{select_environment, EnvSource};
use crate::schema::AirportConfig;

/// Everything a consumer needs to know about the running configuration.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub agency: Agency,
    pub app: App,
    pub environment: Environment,
    pub merged: MergedConfig,
    pub config: AirportConfig,
}

/// Compose the configuration for `settings`.
///
/// Fails on a missing or unknown agency/app, an unresolvable environment, an
/// unreadable overlay, any override key the base documents do not define, or
/// a merged value that does not decode into [`AirportConfig`].
pub fn bootstrap(
    settings: &Settings,
    selection: Option<EnvironmentSelection>,
    source: &dyn EnvSource,
) -> Result<AppContext> {
    let agency: Agency = settings
        .agency
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingAgency { var: AGENCY_VAR })?
        .parse()?;
    let app: App = settings.app.parse()?;
    let environment = select_environment(selection, source)?;

    let set = config_set(agency, app);
    let overlays = load_documents(&settings.overlays)?;

    let issues = set.conformance(&overlays);
    if !issues.is_empty() {
        return Err(ConfigError::Nonconforming { issues });
    }

    let merged = set.merge_with_overlays(environment, &overlays)?;
    for path in merged.placeholders() {
        tracing::warn!(key = %path, "configuration key still holds a placeholder value");
    }
    let config: AirportConfig = merged.to_typed()?;

    tracing::info!(
        agency = %agency,
        app = %app,
        environment = %environment,
        overlays = overlays.len(),
        "configuration composed"
    );

    Ok(AppContext { agency, app, environment, merged, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn lawa() -> Settings {
        Settings { agency: Some("lawa".to_string()), ..Settings::default() }
    }

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_bootstrap_explicit_environment() {
        let context =
            bootstrap(&lawa(), Some(Environment::Staging.into()), &no_env()).expect("context");
        assert_eq!(context.agency, Agency::Lawa);
        assert_eq!(context.environment, Environment::Staging);
        assert_eq!(context.config.server_url.mds, "https://staging.lawa.example.com/mds");
        assert_eq!(context.merged.environment(), Environment::Staging);
    }

    #[test]
    fn test_bootstrap_resolves_current_environment() {
        let source: HashMap<String, String> =
            [("OPEN_AIRPORT_ENV".to_string(), "qa".to_string())].into_iter().collect();
        let context = bootstrap(&lawa(), None, &source).expect("context");
        assert_eq!(context.environment, Environment::Qa);
        assert_eq!(context.config.provider.active_providers, vec!["test-provider"]);
    }

    #[test]
    fn test_bootstrap_requires_environment() {
        let err = bootstrap(&lawa(), Some(EnvironmentSelection::Current), &no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::UnresolvedEnvironment { .. }));
    }

    #[test]
    fn test_bootstrap_requires_agency() {
        let settings = Settings { agency: Some(" ".to_string()), ..Settings::default() };
        let err = bootstrap(&settings, Some(Environment::Qa.into()), &no_env()).unwrap_err();
        assert!(err.to_string().contains(AGENCY_VAR));

        let settings = Settings { agency: Some("sfo".to_string()), ..Settings::default() };
        let err = bootstrap(&settings, Some(Environment::Qa.into()), &no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownAgency { .. }));
    }

    #[test]
    fn test_bootstrap_applies_overlays_last() {
        let tmp = TempDir::new().expect("tmp");
        let overlay = tmp.path().join("local.yaml");
        fs::write(
            &overlay,
            "map:\n  zoom: 9\nenvironments:\n  production:\n    features:\n      csvExport: true\n",
        )
        .expect("write");

        let settings = Settings { overlays: vec![overlay], ..lawa() };
        let context =
            bootstrap(&settings, Some(Environment::Production.into()), &no_env()).expect("context");
        assert_eq!(context.config.map.zoom, 9.0);
        assert!(context.config.feature_enabled("csvExport"));
    }

    #[test]
    fn test_bootstrap_rejects_nonconforming_overlay() {
        let tmp = TempDir::new().expect("tmp");
        let overlay = tmp.path().join("local.toml");
        fs::write(&overlay, "[map]\nbearing = 45\n").expect("write");

        let settings = Settings { overlays: vec![overlay], ..lawa() };
        let err = bootstrap(&settings, Some(Environment::Qa.into()), &no_env()).unwrap_err();
        match err {
            ConfigError::Nonconforming { issues } => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].path, "map.bearing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bootstrap_rejects_null_over_placeholder() {
        let tmp = TempDir::new().expect("tmp");
        let overlay = tmp.path().join("local.yaml");
        fs::write(&overlay, "map:\n  accessToken: null\n").expect("write");

        let settings = Settings { overlays: vec![overlay], ..lawa() };
        let err = bootstrap(&settings, Some(Environment::Qa.into()), &no_env()).unwrap_err();
        match err {
            ConfigError::Nonconforming { issues } => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].path, "map.accessToken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
