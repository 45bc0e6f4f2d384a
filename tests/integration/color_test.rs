//! Integration tests for color classification and the color table

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{maxsetup, run_maxsetup};

#[test]
fn hex_color_shows_conversions() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_maxsetup(&dir, &["color", "#FF8800"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("kind:"));
    assert!(stdout.contains("hex"));
    assert!(stdout.contains("#ff8800"));
    assert!(stdout.contains("rgb(255, 136, 0)"));
    assert!(stdout.contains("nearest:"));
}

#[test]
fn ansi_number_resolves_name_and_rgb() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["color", "208"])
        .assert()
        .success()
        .stdout(predicate::str::contains("208 (dark_orange)"))
        .stdout(predicate::str::contains("#ff8700"));
}

#[test]
fn named_color_is_w3() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["color", "red1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("w3"))
        .stdout(predicate::str::contains("196 (red1)"));
}

#[test]
fn rgb_function_syntax_is_accepted() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["color", "rgb(0, 136, 255)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0088ff"));
}

#[test]
fn out_of_range_rgb_fails() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["color", "rgb(300, 0, 0)"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid RGB color"));
}

#[test]
fn unknown_color_fails() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["color", "not-a-color"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid color"));
}

#[test]
fn colors_filter_narrows_the_table() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_maxsetup(&dir, &["colors", "--filter", "orange"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("dark_orange"));
    assert!(stdout.lines().all(|line| line.contains("orange")));
}

#[test]
fn colors_filter_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["colors", "--filter", "zzz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No colors match"));
}
