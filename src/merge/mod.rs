//! Configuration merge engine

pub mod deep;
pub mod engine;

pub use deep::{deep_merge, deep_merge_maps};
pub use engine::{merge, merge_configs, merge_documents};
