//! Environment resolution from the process context
//!
//! Fallback chain: `OPEN_AIRPORT_ENV`, then `RUN_MODE`. Blank values count as
//! unset. Nothing defaults silently: an unresolved environment is an error.

use std::collections::HashMap;

use crate::domain::{Environment, EnvironmentSelection};
use crate::error::{ConfigError, Result};

/// Application-level environment override.
pub const APP_ENV_VAR: &str = "OPEN_AIRPORT_ENV";

/// Generic runtime mode, consulted when the override is unset.
pub const RUN_MODE_VAR: &str = "RUN_MODE";

/// Where environment variables are read from.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

fn non_blank(source: &dyn EnvSource, key: &str) -> Option<String> {
    source.var(key).filter(|value| !value.trim().is_empty())
}

/// Raw environment name from the fallback chain, if any.
pub fn lookup_environment_name(source: &dyn EnvSource) -> Option<String> {
    non_blank(source, APP_ENV_VAR).or_else(|| non_blank(source, RUN_MODE_VAR))
}

/// Resolve the current environment or fail.
pub fn resolve_environment(source: &dyn EnvSource) -> Result<Environment> {
    let Some(name) = lookup_environment_name(source) else {
        return Err(ConfigError::UnresolvedEnvironment {
            app_var: APP_ENV_VAR,
            mode_var: RUN_MODE_VAR,
        });
    };
    let env = name.parse()?;
    tracing::debug!(environment = %env, "resolved environment from process context");
    Ok(env)
}

/// Turn a caller's selection into a concrete environment. `None` and
/// `Current` both consult `source`.
pub fn select_environment(
    selection: Option<EnvironmentSelection>,
    source: &dyn EnvSource,
) -> Result<Environment> {
    match selection.unwrap_or_default() {
        EnvironmentSelection::Explicit(env) => Ok(env),
        EnvironmentSelection::Current => resolve_environment(source),
    }
}
