//! open-airport-config: configuration composition for the airport operations console
//!
//! Merges a global base document, an agency document, an app base document and
//! an agency app document (plus optional local overrides) in that order, each
//! followed by its own overlay for the selected deployment environment.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod constants;
pub mod documents;
pub mod domain;
pub mod error;
pub mod merge;
pub mod resolver;
pub mod schema;
pub mod utils;

pub use bootstrap::{bootstrap, AppContext};
pub use documents::{config_set, Agency, App, ConfigSet};
pub use domain::{ConfigDocument, Environment, EnvironmentSelection, MergedConfig};
pub use error::{ConfigError, Result};
pub use merge::{merge, merge_configs, merge_documents};
pub use resolver::{resolve_environment, EnvSource, ProcessEnv};
pub use schema::AirportConfig;
