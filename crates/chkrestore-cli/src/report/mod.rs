//! Reporter: Human-readable summary of a run
//!
//! The writer is injected so tests can capture output deterministically
//! instead of scraping real stdout. Summary colors: yellow for the renamed
//! list, green for the done banner, red for the unresolved list.

use std::io::{self, Write};

use chkrestore_core::RunReport;

const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders run summaries to an injected writer
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl Reporter<io::Stdout> {
    /// Create a reporter writing to stdout
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`
    #[must_use]
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Render the three-part summary: renamed list, done banner,
    /// unresolved list.
    ///
    /// # Errors
    /// Returns an error when the underlying writer fails.
    pub fn render(&mut self, report: &RunReport) -> io::Result<()> {
        self.line(YELLOW, "Renamed files:")?;
        if report.renamed.is_empty() {
            self.line(YELLOW, "  (none)")?;
        }
        for entry in &report.renamed {
            let text = format!("  {} -> {}", entry.from.display(), entry.to.display());
            self.line(YELLOW, &text)?;
        }

        self.line(GREEN, "Done!")?;

        self.line(RED, "Unresolved files:")?;
        if report.unresolved.is_empty() {
            self.line(RED, "  (none)")?;
        }
        for entry in &report.unresolved {
            let text = format!("  {} ({})", entry.path.display(), entry.reason);
            self.line(RED, &text)?;
        }

        self.out.flush()
    }

    /// Render the generic failure banner.
    ///
    /// Error detail belongs to the debug log channel, never here.
    ///
    /// # Errors
    /// Returns an error when the underlying writer fails.
    pub fn render_failure(&mut self) -> io::Result<()> {
        self.line(RED, "Error! Run with --verbose to see details.")?;
        self.out.flush()
    }

    fn line(&mut self, color: &str, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{color}{text}{RESET}")
        } else {
            writeln!(self.out, "{text}")
        }
    }
}
