//! File walker: Discovers placeholder files in a directory tree

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Suffix that marks a file as a recovery placeholder
pub const DEFAULT_SUFFIX: &str = ".chk";

/// A placeholder file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
}

/// Scanner for discovering placeholder files under a root directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    suffix: String,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// Override the placeholder suffix (matched case-insensitively)
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Scan the directory tree and return discovered candidates.
    ///
    /// Depth-first, lexicographic per directory, so a run's report order is
    /// reproducible. Symlinked directories are not followed. A directory
    /// that cannot be opened is skipped with a warning rather than ending
    /// the walk.
    pub fn scan(&self) -> impl Iterator<Item = CandidateFile> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let path = entry.into_path();
                if !has_suffix(&path, &self.suffix) {
                    return None;
                }
                debug!("Candidate: {}", path.display());
                Some(CandidateFile { path })
            })
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Case-insensitive suffix match on the file name component only
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(&suffix.to_lowercase()))
}
