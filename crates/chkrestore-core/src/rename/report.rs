//! Outcome model for a single run

use std::path::PathBuf;

use thiserror::Error;

/// Why a candidate was left unresolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    /// No known signature matched the file content
    #[error("unknown type")]
    UnknownType,

    /// The target name already exists; renaming would clobber it
    #[error("target name exists")]
    Conflict,

    /// The file could not be read or renamed
    #[error("i/o failure: {0}")]
    Io(String),
}

/// A candidate that was successfully renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A candidate that was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub path: PathBuf,
    pub reason: Reason,
}

/// Everything one run did, in processing order.
///
/// The two lists are disjoint and together cover every candidate the engine
/// was handed. Nothing is persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub renamed: Vec<Renamed>,
    pub unresolved: Vec<Unresolved>,
}

impl RunReport {
    /// Total number of candidates processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.renamed.len() + self.unresolved.len()
    }

    /// True when no candidate was processed at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
