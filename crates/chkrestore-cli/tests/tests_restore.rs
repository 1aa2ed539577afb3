//! End-to-end tests for the restore pipeline
//!
//! These drive the same code path as the binary, with the summary captured
//! through the injected writer instead of stdout.

#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use chkrestore_cli::commands::restore;
use chkrestore_cli::report::Reporter;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const PDF_MAGIC: &[u8] = b"%PDF-1.4\n";

fn run_over(paths: &[PathBuf]) -> String {
    let mut buf = Vec::new();
    let mut reporter = Reporter::new(&mut buf, false);
    restore::run(paths, &mut reporter).expect("Pipeline must complete");
    String::from_utf8(buf).expect("Report must be valid UTF-8")
}

#[test]
fn test_mixed_directory_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.chk"), PNG_MAGIC).expect("Failed to write file");
    fs::write(temp_dir.path().join("b.chk"), b"garbage content").expect("Failed to write file");
    fs::write(temp_dir.path().join("c.txt"), PNG_MAGIC).expect("Failed to write file");

    let output = run_over(&[temp_dir.path().to_path_buf()]);

    assert!(temp_dir.path().join("a.chk.png").exists());
    assert!(!temp_dir.path().join("a.chk").exists());
    assert!(temp_dir.path().join("b.chk").exists());
    assert!(temp_dir.path().join("c.txt").exists());

    assert!(output.contains("a.chk -> "));
    assert!(output.contains("a.chk.png"));
    assert!(output.contains("b.chk (unknown type)"));
    assert!(output.contains("Done!"));
    assert!(!output.contains("c.txt"));
}

#[test]
fn test_uppercase_suffix_is_processed() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("SAMPLE.CHK"), PDF_MAGIC).expect("Failed to write file");

    run_over(&[temp_dir.path().to_path_buf()]);

    assert!(temp_dir.path().join("SAMPLE.CHK.pdf").exists());
    assert!(!temp_dir.path().join("SAMPLE.CHK").exists());
}

#[test]
fn test_conflict_is_skipped_and_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("foo.chk"), PNG_MAGIC).expect("Failed to write file");
    fs::write(temp_dir.path().join("foo.chk.png"), b"keep me intact").expect("Failed to write file");

    let output = run_over(&[temp_dir.path().to_path_buf()]);

    // The blocker is untouched and the candidate still has its old name
    assert_eq!(
        fs::read(temp_dir.path().join("foo.chk.png")).expect("Failed to read blocker"),
        b"keep me intact"
    );
    assert_eq!(
        fs::read(temp_dir.path().join("foo.chk")).expect("Failed to read candidate"),
        PNG_MAGIC
    );
    assert!(output.contains("foo.chk (target name exists)"));
}

#[test]
fn test_second_run_finds_nothing_left_to_do() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("once.chk"), PNG_MAGIC).expect("Failed to write file");

    let first = run_over(&[temp_dir.path().to_path_buf()]);
    assert!(first.contains("once.chk -> "));

    let second = run_over(&[temp_dir.path().to_path_buf()]);
    assert_eq!(second.matches("(none)").count(), 2);
    assert!(temp_dir.path().join("once.chk.png").exists());
}

#[test]
fn test_nested_directories_are_restored() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let nested = temp_dir.path().join("recovered").join("batch2");
    fs::create_dir_all(&nested).expect("Failed to create nested dirs");
    fs::write(nested.join("deep.chk"), PDF_MAGIC).expect("Failed to write file");

    run_over(&[temp_dir.path().to_path_buf()]);

    assert!(nested.join("deep.chk.pdf").exists());
}

#[test]
fn test_unresolved_files_do_not_fail_the_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("junk1.chk"), b"????").expect("Failed to write file");
    fs::write(temp_dir.path().join("junk2.chk"), b"").expect("Failed to write file");

    // run_over panics if the pipeline errors; unresolved files must not
    let output = run_over(&[temp_dir.path().to_path_buf()]);

    assert!(output.contains("Done!"));
    assert!(output.contains("junk1.chk (unknown type)"));
    assert!(output.contains("junk2.chk (unknown type)"));
}
