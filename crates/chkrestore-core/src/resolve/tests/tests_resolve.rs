//! Tests for scan-root resolution

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use crate::resolve::resolve_root;
use crate::scanner::Scanner;

#[test]
fn test_no_candidates_defaults_to_current_directory() {
    let root = resolve_root(None, &[]);
    assert_eq!(root, PathBuf::from("."));
}

#[test]
fn test_first_existing_directory_wins() {
    let temp_a = TempDir::new().expect("Failed to create temp dir");
    let temp_b = TempDir::new().expect("Failed to create temp dir");

    let candidates = vec![temp_a.path().to_path_buf(), temp_b.path().to_path_buf()];
    let root = resolve_root(None, &candidates);

    assert_eq!(
        root,
        temp_a
            .path()
            .canonicalize()
            .expect("Failed to canonicalize")
    );
}

#[test]
fn test_non_directory_candidates_are_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("plain.txt");
    std::fs::write(&file, b"data").expect("Failed to write file");

    let candidates = vec![
        PathBuf::from("/definitely/not/a/real/path"),
        file,
        temp_dir.path().to_path_buf(),
    ];
    let root = resolve_root(None, &candidates);

    assert_eq!(
        root,
        temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize")
    );
}

#[test]
fn test_all_invalid_candidates_default_to_current_directory() {
    let candidates = vec![PathBuf::from("/no/such/dir"), PathBuf::from("also-missing")];
    let root = resolve_root(None, &candidates);
    assert_eq!(root, PathBuf::from("."));
}

#[test]
fn test_override_skips_candidate_inspection() {
    let temp_override = TempDir::new().expect("Failed to create temp dir");
    let temp_other = TempDir::new().expect("Failed to create temp dir");

    let candidates = vec![temp_other.path().to_path_buf()];
    let root = resolve_root(Some(temp_override.path()), &candidates);

    assert_eq!(
        root,
        temp_override
            .path()
            .canonicalize()
            .expect("Failed to canonicalize")
    );
}

#[test]
#[serial]
fn test_default_root_scans_the_working_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("here.chk"), b"data").expect("Failed to write file");

    let previous = std::env::current_dir().expect("Failed to read current dir");
    std::env::set_current_dir(temp_dir.path()).expect("Failed to change dir");

    let root = resolve_root(None, &[]);
    let found: Vec<_> = Scanner::new(&root).scan().collect();

    std::env::set_current_dir(previous).expect("Failed to restore dir");

    assert_eq!(root, PathBuf::from("."));
    assert_eq!(found.len(), 1);
}

#[test]
fn test_override_that_does_not_exist_is_kept_as_given() {
    // Resolution never fails; a bad override surfaces later as a scan failure
    let root = resolve_root(Some(std::path::Path::new("/missing/override")), &[]);
    assert_eq!(root, PathBuf::from("/missing/override"));
}
