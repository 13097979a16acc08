//! Tests for config construction, validation, and the fixed traversal rules.

use super::types::{candidate_globs, is_excluded_dir};
use super::*;
use crate::error::KeepOursError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_new_stores_root_directory() {
    let config = Config::new("/srv/site");
    assert_eq!(config.root(), Path::new("/srv/site"));
    assert_eq!(config.root_directory, Path::new("/srv/site"));
}

#[test]
fn test_validate_accepts_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new(temp_dir.path());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new(temp_dir.path().join("missing"));

    let err = config.validate().unwrap_err();
    assert!(matches!(err, KeepOursError::UserError(_)));
    assert!(err.to_string().contains("not accessible"));
}

#[test]
fn test_validate_rejects_regular_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("notes.txt");
    std::fs::write(&file_path, "hello\n").unwrap();

    let err = Config::new(&file_path).validate().unwrap_err();
    assert!(err.to_string().contains("is not a directory"));
}

#[test]
fn test_validate_rejects_empty_root() {
    let err = Config::new("").validate().unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn test_candidate_globs_cover_every_extension() {
    let globs = candidate_globs();
    assert_eq!(globs.len(), CANDIDATE_EXTENSIONS.len());
    assert!(globs.contains(&"*.tsx".to_string()));
    assert!(globs.contains(&"*.css".to_string()));
}

#[test]
fn test_excluded_dirs() {
    assert!(is_excluded_dir(".git"));
    assert!(is_excluded_dir("node_modules"));
    assert!(!is_excluded_dir("src"));
    assert!(!is_excluded_dir("git"));
    assert_eq!(EXCLUDED_DIRS.len(), 2);
}
