//! Restore command: Resolve the root, scan it, rename, report
//!
//! Per-file problems are absorbed into the report by the engine; only
//! root-level failures (unreadable scan root) escape from here and become
//! the caller's generic failure banner.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chkrestore_core::{resolve_root, RenameEngine, Scanner};
use tracing::{debug, info};

use crate::report::Reporter;

/// Run the restore pipeline over the first existing directory in `paths`
/// (current directory when none qualifies) and render the summary.
///
/// # Errors
/// Returns an error when the resolved scan root cannot be opened; rendering
/// failures from the injected writer are also propagated.
pub fn run<W: Write>(paths: &[PathBuf], reporter: &mut Reporter<W>) -> Result<()> {
    let root = resolve_root(None, paths);
    info!("Scanning for placeholder files under {}", root.display());

    // Surface an unusable root before walking: the walk itself only warns
    // on unreadable subdirectories.
    fs::read_dir(&root)
        .with_context(|| format!("cannot open scan root {}", root.display()))?;

    let scanner = Scanner::new(&root);
    let candidates: Vec<_> = scanner.scan().collect();
    debug!("Found {} candidate file(s)", candidates.len());

    let report = RenameEngine::new().process(candidates);
    info!(
        "Processed {} candidate(s): {} renamed, {} unresolved",
        report.total(),
        report.renamed.len(),
        report.unresolved.len()
    );

    reporter.render(&report)?;
    Ok(())
}
