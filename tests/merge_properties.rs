//! Merge engine properties over hand-built documents

use open_airport_config::{
    merge, merge_configs, merge_documents, ConfigDocument, ConfigError, Environment,
    EnvironmentSelection, ProcessEnv,
};
use serde_json::{json, Value};
use serial_test::serial;
use similar_asserts::assert_eq;
use std::collections::HashMap;
use std::env;

fn doc(origin: &str, value: Value) -> ConfigDocument {
    let Value::Object(fields) = value else { panic!("documents must be objects") };
    ConfigDocument::new(origin, fields)
}

fn base_common() -> ConfigDocument {
    doc(
        "base-common",
        json!({
            "agency": { "name": "UNDEFINED", "timezone": "America/Los_Angeles" },
            "serverUrl": { "config": "UNDEFINED" },
            "theme": { "palette": { "primary": { "main": "#000" } } },
            "provider": { "activeProviders": ["x", "y"] },
            "environments": {
                "development": { "serverUrl": { "config": "http://localhost:8080/config" } }
            }
        }),
    )
}

fn agency_common() -> ConfigDocument {
    doc(
        "agency-common",
        json!({
            "agency": { "name": "Los Angeles World Airports" },
            "serverUrl": { "config": "https://prod.example.com/config" },
            "environments": {
                "sandbox": { "serverUrl": { "config": "https://sandbox.example.com/config" } }
            }
        }),
    )
}

fn base_app() -> ConfigDocument {
    doc(
        "base-app",
        json!({
            "theme": { "palette": { "secondary": { "main": "#fff" } } },
            "app": { "title": "Open Airport" }
        }),
    )
}

fn agency_app() -> ConfigDocument {
    doc(
        "agency-app",
        json!({
            "provider": { "activeProviders": ["z"] },
            "environments": { "qa": { "app": { "title": "Open Airport QA" } } }
        }),
    )
}

fn no_env() -> HashMap<String, String> {
    HashMap::new()
}

fn merge_all(env: Environment) -> open_airport_config::MergedConfig {
    merge_configs(
        &base_common(),
        &agency_common(),
        &base_app(),
        &agency_app(),
        Some(env.into()),
        &no_env(),
    )
    .expect("merge")
}

#[test]
fn test_agency_value_overrides_base_value() {
    let merged = merge_all(Environment::Production);
    assert_eq!(merged.get("agency.name"), Some(&json!("Los Angeles World Airports")));
    assert_eq!(merged.get("agency.timezone"), Some(&json!("America/Los_Angeles")));
}

#[test]
fn test_environment_fragment_overrides_own_document() {
    let merged = merge_all(Environment::Sandbox);
    assert_eq!(merged.get("serverUrl.config"), Some(&json!("https://sandbox.example.com/config")));

    let merged = merge_all(Environment::Production);
    assert_eq!(merged.get("serverUrl.config"), Some(&json!("https://prod.example.com/config")));
}

#[test]
fn test_earlier_environment_fragment_loses_to_later_document() {
    // base-common's development overlay is beaten by agency-common's own base.
    let merged = merge_all(Environment::Development);
    assert_eq!(merged.get("serverUrl.config"), Some(&json!("https://prod.example.com/config")));
}

#[test]
fn test_nested_objects_merge_key_by_key() {
    let merged = merge_all(Environment::Production);
    assert_eq!(merged.get("theme.palette.primary.main"), Some(&json!("#000")));
    assert_eq!(merged.get("theme.palette.secondary.main"), Some(&json!("#fff")));
}

#[test]
fn test_arrays_are_replaced_not_concatenated() {
    let merged = merge_all(Environment::Production);
    assert_eq!(merged.get("provider.activeProviders"), Some(&json!(["z"])));
}

#[test]
fn test_output_has_no_environments_key() {
    for env in Environment::ALL {
        let merged = merge_all(env);
        assert!(!merged.fields().contains_key("environments"), "{env}");
    }
}

#[test]
fn test_explicit_environment_is_deterministic() {
    let first = merge_all(Environment::Qa);
    let second = merge_all(Environment::Qa);
    assert_eq!(first, second);
    assert_eq!(first.get("app.title"), Some(&json!("Open Airport QA")));
}

#[test]
fn test_inputs_are_not_mutated() {
    let documents = [base_common(), agency_common(), base_app(), agency_app()];
    let snapshots = documents.clone();

    let refs: Vec<&ConfigDocument> = documents.iter().collect();
    for env in Environment::ALL {
        merge_documents(&refs, env).expect("merge");
    }

    assert_eq!(documents, snapshots);
}

#[test]
fn test_key_coverage_is_union_of_documents_and_selected_fragments() {
    let merged = merge_all(Environment::Qa);
    let keys: Vec<&str> = merged.fields().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["agency", "app", "provider", "serverUrl", "theme"]);
}

#[test]
#[serial]
fn test_unresolvable_environment_is_fatal() {
    env::remove_var("OPEN_AIRPORT_ENV");
    env::set_var("RUN_MODE", "");

    let documents = [base_common(), agency_common()];
    let refs: Vec<&ConfigDocument> = documents.iter().collect();

    let omitted = merge(&refs, None, &ProcessEnv);
    let current = merge(&refs, Some(EnvironmentSelection::Current), &ProcessEnv);
    env::remove_var("RUN_MODE");

    for result in [omitted, current] {
        match result {
            Err(ConfigError::UnresolvedEnvironment { app_var, mode_var }) => {
                assert_eq!(app_var, "OPEN_AIRPORT_ENV");
                assert_eq!(mode_var, "RUN_MODE");
            }
            other => panic!("expected an unresolved environment error, got {other:?}"),
        }
    }
}

#[test]
#[serial]
fn test_current_environment_reads_process_variables() {
    env::set_var("OPEN_AIRPORT_ENV", "sandbox");
    env::set_var("RUN_MODE", "production");

    let documents = [base_common(), agency_common()];
    let refs: Vec<&ConfigDocument> = documents.iter().collect();
    let merged = merge(&refs, None, &ProcessEnv);

    env::remove_var("OPEN_AIRPORT_ENV");
    env::remove_var("RUN_MODE");

    let merged = merged.expect("merge");
    assert_eq!(merged.environment(), Environment::Sandbox);
    assert_eq!(merged.get("serverUrl.config"), Some(&json!("https://sandbox.example.com/config")));
}
