//! Config documents: the embedded registry and on-disk overrides

pub mod loader;
pub mod registry;

pub use loader::{load_document, load_documents};
pub use registry::{config_set, Agency, App, ConfigSet};
