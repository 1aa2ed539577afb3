//! Scanner module: Candidate discovery in a directory tree
//!
//! Responsible for walking the scan root, skipping unreadable directories,
//! and collecting files whose name carries the placeholder suffix.

mod walker;

pub use walker::{CandidateFile, Scanner, DEFAULT_SUFFIX};
