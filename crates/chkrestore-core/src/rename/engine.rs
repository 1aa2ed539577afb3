//! Rename engine: Sniff candidates and commit renames one at a time

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{Reason, Renamed, RunReport, Unresolved};
use crate::scanner::CandidateFile;
use crate::sniff;

/// Drives the rename pass over a sequence of candidates.
///
/// Per-file failures become report entries; one file can never abort the
/// batch. Committed renames are not rolled back if a later candidate fails.
#[derive(Debug, Default)]
pub struct RenameEngine;

impl RenameEngine {
    /// Create a new rename engine
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Process candidates in order and return the accumulated report
    pub fn process(&self, candidates: impl IntoIterator<Item = CandidateFile>) -> RunReport {
        let mut report = RunReport::default();
        for candidate in candidates {
            self.process_one(candidate, &mut report);
        }
        report
    }

    fn process_one(&self, candidate: CandidateFile, report: &mut RunReport) {
        let path = candidate.path;

        let kind = match sniff::sniff(&path) {
            Ok(Some(kind)) => kind,
            Ok(None) => {
                debug!("No signature matched: {}", path.display());
                report.unresolved.push(Unresolved {
                    path,
                    reason: Reason::UnknownType,
                });
                return;
            }
            Err(err) => {
                warn!("Cannot read {}: {}", path.display(), err);
                report.unresolved.push(Unresolved {
                    path,
                    reason: Reason::Io(err.to_string()),
                });
                return;
            }
        };

        let target = target_path(&path, kind.extension());

        // Renaming over an existing file would be silent data loss. This is
        // check-then-act: a target created between the check and the rename
        // below would still be clobbered. The tool is single-threaded and
        // owns the tree while it runs, so the window is not defended further.
        if target.symlink_metadata().is_ok() {
            warn!(
                "Target already exists, skipping: {} -> {}",
                path.display(),
                target.display()
            );
            report.unresolved.push(Unresolved {
                path,
                reason: Reason::Conflict,
            });
            return;
        }

        match fs::rename(&path, &target) {
            Ok(()) => {
                debug!("Renamed {} -> {}", path.display(), target.display());
                report.renamed.push(Renamed {
                    from: path,
                    to: target,
                });
            }
            Err(err) => {
                warn!("Cannot rename {}: {}", path.display(), err);
                report.unresolved.push(Unresolved {
                    path,
                    reason: Reason::Io(err.to_string()),
                });
            }
        }
    }
}

/// Append `.<ext>` to the full file name, keeping the placeholder suffix
fn target_path(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
