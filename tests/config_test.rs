//! Integration tests for Settings loading from explicit config files.
//!
//! Note: These tests assume no global config file and no RSDS_* variables,
//! so the explicit file is applied directly on top of compiled defaults.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use rsds::application::ApplicationError;
use rsds::config::Settings;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("rsds.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_config_file_when_loading_then_uses_defaults() {
    let settings = Settings::load(None).expect("load defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_partial_config_file_when_loading_then_replaces_only_given_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
capacity = 3

[bst]
values = [5, 5, 1]

[graph]
edges = [[1, 0]]
"#,
    );

    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    assert_eq!(settings.capacity, 3);
    assert_eq!(settings.bst.values, vec![5, 5, 1]);
    assert_eq!(settings.graph.edges, vec![[1, 0]]);
    // Untouched sections keep defaults
    assert_eq!(settings.graph.vertices, 4);
    assert_eq!(settings.linear.values, vec![10, 20, 30, 40, 50]);
}

#[test]
fn given_missing_config_file_when_loading_then_config_error() {
    let err = Settings::load(Some(Path::new("/nonexistent/rsds.toml"))).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn given_malformed_config_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "capacity = \"lots\"\n");

    let err = Settings::load(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("parse"), "{err}");
}

#[test]
fn given_zero_capacity_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "capacity = 0\n");

    let err = Settings::load(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }), "{err:?}");
    assert!(err.to_string().contains("capacity must be at least 1"), "{err}");
}

#[test]
fn given_effective_settings_when_showing_then_toml_contains_sections() {
    let text = Settings::default().to_toml().unwrap();
    assert!(text.contains("capacity = 100"));
    assert!(text.contains("[bst]"));
    assert!(text.contains("[graph]"));
}
