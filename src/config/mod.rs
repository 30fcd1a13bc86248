//! Bootstrap settings loading
//!
//! Resolves which agency and app to compose, and which extra override
//! documents to stack on top, with precedence (Env > File > Defaults).

pub mod settings;

pub use settings::{Settings, AGENCY_VAR, APP_VAR, SETTINGS_FILE};
