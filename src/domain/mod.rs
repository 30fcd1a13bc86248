//! Core configuration types

pub mod document;
pub mod environment;
pub mod merged;

pub use document::{ConfigDocument, ENVIRONMENTS_KEY, PLACEHOLDER};
pub use environment::{Environment, EnvironmentSelection};
pub use merged::MergedConfig;
