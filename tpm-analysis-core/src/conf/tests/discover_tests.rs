use crate::conf::{ConfigError, discover_sources, resolve_glob};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn discover_finds_matching_directories() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("machine2")).unwrap();
    fs::create_dir(root.join("machine1")).unwrap();
    fs::create_dir(root.join("other")).unwrap();

    // Act
    let result = discover_sources(root, "machine*").unwrap();

    // Assert
    assert_eq!(result, vec!["machine1".to_string(), "machine2".to_string()]);
}

#[test]
fn discover_ignores_plain_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("machine1")).unwrap();
    fs::write(root.join("machine9"), "").unwrap();

    // Act
    let result = discover_sources(root, "machine*").unwrap();

    // Assert
    assert_eq!(result, vec!["machine1".to_string()]);
}

#[test]
fn discover_returns_empty_vec_when_no_matches() {
    let dir = tempdir().unwrap();

    let result = discover_sources(dir.path(), "machine*").unwrap();

    assert!(result.is_empty());
}

#[test]
fn discover_rejects_invalid_glob() {
    let dir = tempdir().unwrap();

    let err = discover_sources(dir.path(), "[").unwrap_err();

    assert!(matches!(err, ConfigError::Glob { .. }));
}

#[test]
fn resolve_glob_joins_root_and_pattern() {
    let root = Path::new("/data");

    assert_eq!(resolve_glob(root, "machine*"), "/data/machine*");
}
