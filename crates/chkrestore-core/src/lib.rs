//! chkrestore-core: Core library for restoring stripped file extensions
//!
//! Some recovery and export pipelines leave files behind with a `.chk`
//! placeholder name and no usable extension. This library inspects each
//! file's leading bytes, matches them against a table of known binary
//! signatures, and renames the file with the extension that matches its
//! detected content type. The file name is never consulted for detection,
//! only its content.
//!
//! # Pipeline
//!
//! resolve a scan root → walk it for `.chk` candidates → sniff each
//! candidate → rename or record as unresolved → hand the report to the
//! caller.

pub mod rename;
pub mod resolve;
pub mod scanner;
pub mod sniff;

// Re-export commonly used types
pub use rename::{Reason, RenameEngine, Renamed, RunReport, Unresolved};
pub use resolve::resolve_root;
pub use scanner::{CandidateFile, Scanner, DEFAULT_SUFFIX};
pub use sniff::{detect, sniff, FileKind, MAX_SNIFF_LEN};
