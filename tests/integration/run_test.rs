//! Integration tests for the run counter command

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{maxsetup, run_maxsetup};

#[test]
fn run_increments_and_persists() {
    let dir = TempDir::new().unwrap();

    maxsetup(&dir)
        .arg("run")
        .assert()
        .success()
        .stdout("Run 1\n");
    maxsetup(&dir)
        .arg("run")
        .assert()
        .success()
        .stdout("Run 2\n");

    assert_eq!(
        fs::read_to_string(dir.path().join("logs/run.txt")).unwrap(),
        "2"
    );
}

#[test]
fn run_show_does_not_increment() {
    let dir = TempDir::new().unwrap();
    run_maxsetup(&dir, &["run"]);

    let (stdout, _, exit_code) = run_maxsetup(&dir, &["run", "--show"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "1");

    let (stdout, _, _) = run_maxsetup(&dir, &["run", "--show"]);
    assert_eq!(stdout.trim(), "1");
}

#[test]
fn run_reset_starts_over() {
    let dir = TempDir::new().unwrap();
    run_maxsetup(&dir, &["run"]);
    run_maxsetup(&dir, &["run"]);

    maxsetup(&dir).args(["run", "--reset"]).assert().success();
    maxsetup(&dir)
        .arg("run")
        .assert()
        .success()
        .stdout("Run 1\n");
}

#[test]
fn run_honors_base_flag() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("project");
    fs::create_dir(&project).unwrap();

    maxsetup(&dir)
        .args(["--base", "project", "run"])
        .assert()
        .success();
    assert!(project.join("logs/run.txt").exists());
    assert!(!dir.path().join("logs").exists());
}

#[test]
fn corrupt_counter_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("logs")).unwrap();
    fs::write(dir.path().join("logs/run.txt"), "abc").unwrap();

    maxsetup(&dir)
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn run_banner_reaches_log_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("logs")).unwrap();

    maxsetup(&dir).arg("run").assert().success();

    let log = fs::read_to_string(dir.path().join("logs/log.log")).unwrap();
    assert!(log.contains("Run 1"), "{log}");
    let verbose = fs::read_to_string(dir.path().join("logs/verbose.log")).unwrap();
    assert!(verbose.contains("Run 1"), "{verbose}");
}
