//! Command dispatch against a broken config file.

use std::fs;

use clap::Parser;
use tempfile::TempDir;

use rsds::cli::{execute_command, Cli, CliError};
use rsds::exitcode;

fn cli_with_broken_config(dir: &TempDir, args: &[&str]) -> Cli {
    let path = dir.path().join("rsds.toml");
    fs::write(&path, "capacity = \"lots\"\n").unwrap();
    let path = path.to_string_lossy().into_owned();
    let mut argv = vec!["rsds", "--config", path.as_str()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn given_broken_config_when_printing_template_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let cli = cli_with_broken_config(&dir, &["config", "template"]);
    assert!(execute_command(&cli).is_ok());
}

#[test]
fn given_broken_config_when_printing_path_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let cli = cli_with_broken_config(&dir, &["config", "path"]);
    assert!(execute_command(&cli).is_ok());
}

#[test]
fn given_broken_config_when_showing_config_then_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let cli = cli_with_broken_config(&dir, &["config", "show"]);

    let err: CliError = execute_command(&cli).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::CONFIG);
}

#[test]
fn given_broken_config_when_running_structure_command_then_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let cli = cli_with_broken_config(&dir, &["bst", "1", "2"]);

    let err = execute_command(&cli).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::CONFIG);
}
