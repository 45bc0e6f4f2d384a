//! Integration tests for top-level CLI behavior

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{maxsetup, run_maxsetup, write_config};

// ============================================================================
// Help and Usage
// ============================================================================

#[test]
fn help_lists_every_subcommand() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_maxsetup(&dir, &["--help"]);

    assert_eq!(exit_code, 0);
    for name in [
        "gradient",
        "rainbow",
        "panel",
        "color",
        "colors",
        "run",
        "init",
        "escape",
        "config",
        "completions",
    ] {
        assert!(stdout.contains(name), "missing {name} in help");
    }
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir).assert().code(2);
}

#[test]
fn unknown_justify_value_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["gradient", "hi", "--justify", "middle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn version_flag_prints_version() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_follows_env_override() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_maxsetup(&dir, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.trim(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();

    maxsetup(&dir).args(["config", "init"]).assert().success();
    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("[gradient]"));
    assert!(written.contains("default_stops = 3"));

    maxsetup(&dir)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
    maxsetup(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_reflects_file() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[panel]\nborder = \"#112233\"\n");

    maxsetup(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("border = \"#112233\""))
        .stdout(predicate::str::contains("output_dir = \"tasks\""));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[gradient]\ndefault_stops = 42\n");

    maxsetup(&dir)
        .args(["rainbow", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("default_stops"));
}

#[test]
fn broken_config_can_still_be_located_and_replaced() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[gradient]\ndefault_stops = 42\n");

    maxsetup(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    maxsetup(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("default_stops = 3"));

    maxsetup(&dir).args(["rainbow", "ok"]).assert().success();
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("maxsetup"));
}
