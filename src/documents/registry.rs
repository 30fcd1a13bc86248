//! Compile-time registry of agency and app documents
//!
//! Every document is embedded from `agency-config/` and parsed on first use.
//! Selecting an agency or app is a `match` on a closed enum; unregistered keys
//! fail at parse time with the list of known keys.

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

use crate::constants;
use crate::domain::{ConfigDocument, Environment, EnvironmentSelection, MergedConfig};
use crate::error::{ConfigError, Result};
use crate::merge;
use crate::resolver::EnvSource;
use crate::schema::{check_conformance, ConformanceIssue};

fn embedded(origin: &str, text: &str) -> ConfigDocument {
    ConfigDocument::from_toml_str(origin, text)
        .unwrap_or_else(|err| panic!("embedded document is invalid: {err}"))
}

static BASE_COMMON: Lazy<ConfigDocument> = Lazy::new(|| {
    embedded("agency-config/base/common.toml", include_str!("../../agency-config/base/common.toml"))
        .with_environment_defaults(constants::environment_overlays())
        .unwrap_or_else(|err| panic!("embedded document is invalid: {err}"))
});

static BASE_OPEN_AIRPORT: Lazy<ConfigDocument> = Lazy::new(|| {
    embedded(
        "agency-config/base/open-airport.toml",
        include_str!("../../agency-config/base/open-airport.toml"),
    )
});

static LAWA_COMMON: Lazy<ConfigDocument> = Lazy::new(|| {
    embedded(
        "agency-config/agencies/lawa/common.toml",
        include_str!("../../agency-config/agencies/lawa/common.toml"),
    )
});

static LAWA_OPEN_AIRPORT: Lazy<ConfigDocument> = Lazy::new(|| {
    embedded(
        "agency-config/agencies/lawa/open-airport.toml",
        include_str!("../../agency-config/agencies/lawa/open-airport.toml"),
    )
});

static DEMO_COMMON: Lazy<ConfigDocument> = Lazy::new(|| {
    embedded(
        "agency-config/agencies/demo/common.toml",
        include_str!("../../agency-config/agencies/demo/common.toml"),
    )
});

static DEMO_OPEN_AIRPORT: Lazy<ConfigDocument> = Lazy::new(|| {
    embedded(
        "agency-config/agencies/demo/open-airport.toml",
        include_str!("../../agency-config/agencies/demo/open-airport.toml"),
    )
});

/// Operating authorities with a registered configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agency {
    /// Los Angeles World Airports
    Lawa,
    /// Sample agency used for demos and local development
    Demo,
}

impl Agency {
    pub const ALL: [Agency; 2] = [Agency::Lawa, Agency::Demo];

    pub fn key(&self) -> &'static str {
        match self {
            Agency::Lawa => "lawa",
            Agency::Demo => "demo",
        }
    }

    fn common_document(&self) -> &'static ConfigDocument {
        match self {
            Agency::Lawa => &LAWA_COMMON,
            Agency::Demo => &DEMO_COMMON,
        }
    }

    fn app_document(&self, app: App) -> &'static ConfigDocument {
        match (self, app) {
            (Agency::Lawa, App::OpenAirport) => &LAWA_OPEN_AIRPORT,
            (Agency::Demo, App::OpenAirport) => &DEMO_OPEN_AIRPORT,
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Agency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Agency::ALL.into_iter().find(|agency| agency.key() == key).ok_or_else(|| {
            ConfigError::UnknownAgency {
                key: s.trim().to_string(),
                registered: join_keys(Agency::ALL.iter().map(Agency::key)),
            }
        })
    }
}

/// Applications that consume the composed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum App {
    OpenAirport,
}

impl App {
    pub const ALL: [App; 1] = [App::OpenAirport];

    pub fn key(&self) -> &'static str {
        match self {
            App::OpenAirport => "open-airport",
        }
    }

    fn base_document(&self) -> &'static ConfigDocument {
        match self {
            App::OpenAirport => &BASE_OPEN_AIRPORT,
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for App {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        App::ALL.into_iter().find(|app| app.key() == key).ok_or_else(|| ConfigError::UnknownApp {
            key: s.trim().to_string(),
            registered: join_keys(App::ALL.iter().map(App::key)),
        })
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}

/// The four documents composing one agency/app pair, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub struct ConfigSet<'a> {
    pub base_common: &'a ConfigDocument,
    pub agency_common: &'a ConfigDocument,
    pub base_app: &'a ConfigDocument,
    pub agency_app: &'a ConfigDocument,
}

impl<'a> ConfigSet<'a> {
    pub fn documents(&self) -> [&'a ConfigDocument; 4] {
        [self.base_common, self.agency_common, self.base_app, self.agency_app]
    }

    pub fn bases(&self) -> [&'a ConfigDocument; 2] {
        [self.base_common, self.base_app]
    }

    pub fn overrides(&self) -> [&'a ConfigDocument; 2] {
        [self.agency_common, self.agency_app]
    }

    pub fn merge(
        &self,
        selection: Option<EnvironmentSelection>,
        source: &dyn EnvSource,
    ) -> Result<MergedConfig> {
        merge::merge(&self.documents(), selection, source)
    }

    /// Merge with extra documents stacked above the agency app document.
    pub fn merge_with_overlays(
        &self,
        environment: Environment,
        overlays: &[ConfigDocument],
    ) -> Result<MergedConfig> {
        let mut stack: Vec<&ConfigDocument> = self.documents().to_vec();
        stack.extend(overlays);
        merge::merge_documents(&stack, environment)
    }

    /// Keys in the agency documents or `overlays` that the base documents do
    /// not define.
    pub fn conformance(&self, overlays: &[ConfigDocument]) -> Vec<ConformanceIssue> {
        let mut checked: Vec<&ConfigDocument> = self.overrides().to_vec();
        checked.extend(overlays);
        check_conformance(&self.bases(), &checked)
    }
}

/// Registered documents for `agency` running `app`.
pub fn config_set(agency: Agency, app: App) -> ConfigSet<'static> {
    ConfigSet {
        base_common: &BASE_COMMON,
        agency_common: agency.common_document(),
        base_app: app.base_document(),
        agency_app: agency.app_document(app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ENVIRONMENTS_KEY;
    use crate::schema::AirportConfig;

    #[test]
    fn test_unknown_agency_lists_registered_keys() {
        let err = "jfk".parse::<Agency>().unwrap_err();
        assert_eq!(err.to_string(), "unknown agency 'jfk' (registered: lawa, demo)");
    }

    #[test]
    fn test_keys_parse_case_insensitively() {
        assert_eq!("LAWA".parse::<Agency>().unwrap(), Agency::Lawa);
        assert_eq!(" open-airport ".parse::<App>().unwrap(), App::OpenAirport);
        assert!("console".parse::<App>().is_err());
    }

    #[test]
    fn test_base_common_carries_constant_overlays() {
        let set = config_set(Agency::Demo, App::OpenAirport);
        let environments = set.base_common.environments().unwrap().unwrap();
        for env in Environment::ALL {
            assert!(environments[env.as_str()]["auth"]["clientId"].is_string());
        }
    }

    #[test]
    fn test_every_registered_pair_conforms() {
        for agency in Agency::ALL {
            for app in App::ALL {
                let issues = config_set(agency, app).conformance(&[]);
                assert!(issues.is_empty(), "{agency}/{app}: {issues:?}");
            }
        }
    }

    #[test]
    fn test_every_registered_pair_decodes_in_every_environment() {
        for agency in Agency::ALL {
            for app in App::ALL {
                for env in Environment::ALL {
                    let merged = config_set(agency, app).merge_with_overlays(env, &[]).unwrap();
                    assert!(!merged.fields().contains_key(ENVIRONMENTS_KEY));
                    let typed: AirportConfig = merged.to_typed().unwrap();
                    assert_eq!(typed.agency.key, agency.key());
                    assert!(merged.placeholders().is_empty(), "{agency}/{env}: {:?}", merged.placeholders());
                }
            }
        }
    }

    #[test]
    fn test_lawa_sandbox_endpoints() {
        let merged = config_set(Agency::Lawa, App::OpenAirport)
            .merge_with_overlays(Environment::Sandbox, &[])
            .unwrap();
        assert_eq!(
            merged.get("serverUrl.config").and_then(|v| v.as_str()),
            Some("https://sandbox.lawa.example.com/config")
        );
        assert_eq!(
            merged.get("auth.clientId").and_then(|v| v.as_str()),
            Some("oa-console-sandbox")
        );
        assert_eq!(
            merged.get("agency.name").and_then(|v| v.as_str()),
            Some("Los Angeles World Airports")
        );
    }
}
