//! Tests for config loading

use std::fs;

use super::*;

fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "[tooltip]\ngrace_ms = 300\nalways_display = true\n",
    );

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.tooltip.grace_ms, 300);
    assert!(config.tooltip.always_display);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[tooltip]\nalways_display = true\n");

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.tooltip.grace_ms, 150);
    assert!(config.tooltip.always_display);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "[tooltip]\ngrace_ms = 90\n\n[future_section]\nkey = \"value\"\n",
    );

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.tooltip.grace_ms, 90);
}

#[test]
fn test_missing_explicit_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = load_config(Some(&path));

    assert!(matches!(result, Err(HovertipError::Io(_))));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[tooltip\ngrace_ms = oops\n");

    let result = load_config(Some(&path));

    match result {
        Err(HovertipError::InvalidConfig(reported_path, _)) => {
            assert!(reported_path.contains("config.toml"));
        }
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_wrong_value_type_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[tooltip]\ngrace_ms = \"fast\"\n");

    let result = load_config(Some(&path));

    assert!(matches!(result, Err(HovertipError::InvalidConfig(_, _))));
}

#[test]
fn test_default_path_is_under_home_config() {
    // Home is expected to resolve in any environment that runs the tests
    let path = config_path().unwrap();

    assert!(path.ends_with(".config/hovertip/config.toml"));
}
