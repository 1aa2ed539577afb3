//! Resolver module: Picking the scan root
//!
//! The root is chosen once per run and read-only afterwards. Resolution
//! never fails; whether the chosen directory is actually scannable is the
//! scanner's concern.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Resolve the scan root from an explicit override or positional arguments.
///
/// An explicit override (library usage) is normalized and used directly
/// without inspecting `candidates`. Otherwise the first candidate naming an
/// existing directory wins. With no candidates, or none naming a directory,
/// the current directory is used.
#[must_use]
pub fn resolve_root(override_path: Option<&Path>, candidates: &[PathBuf]) -> PathBuf {
    if let Some(path) = override_path {
        return normalize(path);
    }

    for candidate in candidates {
        if candidate.is_dir() {
            debug!("Scan root from arguments: {}", candidate.display());
            return normalize(candidate);
        }
        debug!("Not a directory, skipping: {}", candidate.display());
    }

    PathBuf::from(".")
}

/// Canonicalize when possible, otherwise keep the path as given
fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests;
