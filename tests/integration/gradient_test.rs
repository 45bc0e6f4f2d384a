//! Integration tests for gradient, rainbow and panel output

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{maxsetup, run_maxsetup};

// ============================================================================
// Gradient
// ============================================================================

#[test]
fn gradient_without_color_prints_message() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_maxsetup(&dir, &["gradient", "hello world"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "hello world\n");
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn gradient_justifies_into_width() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, _) = run_maxsetup(
        &dir,
        &["gradient", "hello", "--justify", "right", "--width", "10"],
    );
    assert_eq!(stdout, "     hello\n");

    let (stdout, _, _) = run_maxsetup(
        &dir,
        &["gradient", "hello", "--justify", "center", "--width", "11"],
    );
    assert_eq!(stdout, "   hello\n");
}

#[test]
fn gradient_accepts_every_supported_stop_count() {
    let dir = TempDir::new().unwrap();
    for stops in 2..=10 {
        let stops = stops.to_string();
        maxsetup(&dir)
            .args(["gradient", "abcdefghijklmnop", "--stops", stops.as_str()])
            .assert()
            .success()
            .stdout("abcdefghijklmnop\n");
    }
}

#[test]
fn gradient_rejects_out_of_range_stops() {
    let dir = TempDir::new().unwrap();

    maxsetup(&dir)
        .args(["gradient", "hi", "--stops", "11"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exceeds palette size"));

    maxsetup(&dir)
        .args(["gradient", "hi", "--stops", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least 2"));
}

#[test]
fn gradient_with_start_and_truncate_succeeds() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["gradient", "ABCDEFGHIJ", "--stops", "4", "--start", "12", "--truncate"])
        .assert()
        .success()
        .stdout("ABCDEFGHIJ\n");
}

#[test]
fn empty_message_prints_empty_line() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["gradient", ""])
        .assert()
        .success()
        .stdout("\n");
}

// ============================================================================
// Rainbow
// ============================================================================

#[test]
fn rainbow_prints_message() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["rainbow", "over the rainbow"])
        .assert()
        .success()
        .stdout("over the rainbow\n");
}

// ============================================================================
// Panel
// ============================================================================

#[test]
fn panel_draws_border_title_and_body() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_maxsetup(
        &dir,
        &["panel", "hello", "--title", "Hi", "--width", "20", "--stops", "2"],
    );

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "╭─────── Hi ───────╮",
            "│ hello            │",
            "╰──────────────────╯",
        ]
    );
}

#[test]
fn panel_subtitle_and_justify() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, _) = run_maxsetup(
        &dir,
        &[
            "panel", "x", "--subtitle", "end", "--width", "14", "--justify", "right",
        ],
    );

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "│          x │");
    assert_eq!(lines[2], "╰────── end ─╯");
}
