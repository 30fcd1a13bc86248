//! Per-environment identity constants
//!
//! Raw auth endpoints and client ids for each deployment tier. The global base
//! document takes its `environments.<name>.auth` overlays from here.

use serde_json::{json, Map, Value};

use crate::domain::Environment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentConstants {
    pub auth_domain: &'static str,
    pub auth_client_id: &'static str,
    pub auth_audience: &'static str,
}

const DEVELOPMENT: EnvironmentConstants = EnvironmentConstants {
    auth_domain: "auth.dev.open-airport.example.com",
    auth_client_id: "oa-console-development",
    auth_audience: "https://api.dev.open-airport.example.com",
};

const QA: EnvironmentConstants = EnvironmentConstants {
    auth_domain: "auth.qa.open-airport.example.com",
    auth_client_id: "oa-console-qa",
    auth_audience: "https://api.qa.open-airport.example.com",
};

const STAGING: EnvironmentConstants = EnvironmentConstants {
    auth_domain: "auth.staging.open-airport.example.com",
    auth_client_id: "oa-console-staging",
    auth_audience: "https://api.staging.open-airport.example.com",
};

const SANDBOX: EnvironmentConstants = EnvironmentConstants {
    auth_domain: "auth.sandbox.open-airport.example.com",
    auth_client_id: "oa-console-sandbox",
    auth_audience: "https://api.sandbox.open-airport.example.com",
};

const PRODUCTION: EnvironmentConstants = EnvironmentConstants {
    auth_domain: "auth.open-airport.example.com",
    auth_client_id: "oa-console-production",
    auth_audience: "https://api.open-airport.example.com",
};

pub fn for_environment(env: Environment) -> &'static EnvironmentConstants {
    match env {
        Environment::Development => &DEVELOPMENT,
        Environment::Qa => &QA,
        Environment::Staging => &STAGING,
        Environment::Sandbox => &SANDBOX,
        Environment::Production => &PRODUCTION,
    }
}

/// `environments` mapping with an `auth` fragment for every environment.
pub fn environment_overlays() -> Map<String, Value> {
    Environment::ALL
        .into_iter()
        .map(|env| {
            let constants = for_environment(env);
            let fragment = json!({
                "auth": {
                    "domain": constants.auth_domain,
                    "clientId": constants.auth_client_id,
                    "audience": constants.auth_audience,
                }
            });
            (env.as_str().to_string(), fragment)
        })
        .collect()
}
