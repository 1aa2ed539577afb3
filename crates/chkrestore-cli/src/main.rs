//! chkrestore: Restores file extensions for .chk recovery files
//!
//! Scans a directory tree for `.chk` placeholder files, sniffs each file's
//! leading bytes, and appends the extension matching the detected content
//! type. No file is ever deleted or overwritten.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chkrestore_cli::commands;
use chkrestore_cli::report::Reporter;

#[derive(Parser)]
#[command(name = "chkrestore")]
#[command(
    author,
    version,
    about = "Restores file extensions for .chk recovery files",
    long_about = None
)]
struct Cli {
    /// Candidate scan roots; the first existing directory is used,
    /// defaulting to the current directory
    paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable ANSI colors in the summary
    #[arg(long)]
    no_color: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // Diagnostics go to stderr so the summary on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut reporter = Reporter::stdout(!cli.no_color);

    if let Err(err) = commands::restore::run(&cli.paths, &mut reporter) {
        // Detail stays on the debug channel; users get the generic banner
        debug!("Pipeline failed: {:#}", err);
        let _ = reporter.render_failure();
        std::process::exit(1);
    }
}
