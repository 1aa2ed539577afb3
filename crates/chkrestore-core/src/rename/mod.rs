//! Rename module: The rename pass and its outcome report
//!
//! Each candidate is sniffed once and either renamed with the detected
//! extension or recorded as unresolved with a reason. Renames are additive
//! (an extension is appended); existing files are never overwritten.

mod engine;
mod report;

pub use engine::RenameEngine;
pub use report::{Reason, Renamed, RunReport, Unresolved};
