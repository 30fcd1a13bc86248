//! Small shared helpers

pub mod keypath;
