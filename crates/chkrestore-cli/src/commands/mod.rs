//! CLI command implementations

pub mod restore;
