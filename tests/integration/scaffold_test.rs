//! Integration tests for project scaffolding

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{maxsetup, run_maxsetup};

const EXPECTED_FILES: &[&str] = &[
    ".vscode/launch.json",
    ".vscode/settings.json",
    ".vscode/tasks.json",
    ".env",
    ".gitignore",
    "LICENSE",
    "config/cspell.json",
    "config/cspell.txt",
    "static/style.css",
    "logs/run.txt",
    "logs/log.log",
    "logs/verbose.log",
];

#[test]
fn init_creates_every_file() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_maxsetup(&dir, &["init"]);

    assert_eq!(exit_code, 0);
    for path in EXPECTED_FILES {
        assert!(dir.path().join(path).is_file(), "missing {path}");
        assert!(stdout.contains(path), "not reported: {path}");
    }
    assert_eq!(
        fs::read_to_string(dir.path().join("logs/run.txt")).unwrap(),
        "0"
    );
}

#[test]
fn json_files_are_valid_json() {
    let dir = TempDir::new().unwrap();
    run_maxsetup(&dir, &["init"]);

    for path in EXPECTED_FILES.iter().filter(|p| p.ends_with(".json")) {
        let content = fs::read_to_string(dir.path().join(path)).unwrap();
        assert!(
            serde_json::from_str::<serde_json::Value>(&content).is_ok(),
            "{path} is not valid JSON"
        );
    }
}

#[test]
fn second_init_keeps_existing_files() {
    let dir = TempDir::new().unwrap();
    run_maxsetup(&dir, &["init"]);
    fs::write(dir.path().join(".env"), "MINE='kept'\n").unwrap();

    maxsetup(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));
    assert_eq!(
        fs::read_to_string(dir.path().join(".env")).unwrap(),
        "MINE='kept'\n"
    );
}

#[test]
fn force_overwrites_existing_files() {
    let dir = TempDir::new().unwrap();
    run_maxsetup(&dir, &["init"]);
    fs::write(dir.path().join(".env"), "MINE='kept'\n").unwrap();

    maxsetup(&dir).args(["init", "--force"]).assert().success();
    let env = fs::read_to_string(dir.path().join(".env")).unwrap();
    assert!(!env.contains("MINE"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["--base", "fresh", "init", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would create"));
    assert!(!dir.path().join("fresh").exists());
}

#[test]
fn license_names_the_project_directory() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("demo-app");
    fs::create_dir(&project).unwrap();

    maxsetup(&dir)
        .args(["--base", "demo-app", "init"])
        .assert()
        .success();
    let license = fs::read_to_string(project.join("LICENSE")).unwrap();
    assert!(license.contains("demo-app"));
}
