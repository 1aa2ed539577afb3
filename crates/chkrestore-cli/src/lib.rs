//! chkrestore-cli library
//!
//! This module exposes the internal functionality of chkrestore-cli for
//! testing purposes.

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub mod report;
pub use report::Reporter;
