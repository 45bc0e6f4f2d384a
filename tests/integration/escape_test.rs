//! Integration tests for the escape command

use std::collections::BTreeMap;
use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{maxsetup, write_config, write_file};

#[test]
fn escape_file_shows_escaped_literal() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[panel]\nwidth = 100\n");
    write_file(dir.path(), "snippet.txt", "a \"b\"\n    c\n");

    maxsetup(&dir)
        .args(["escape", "snippet.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"a \"b\"\n\tc\n"#))
        .stdout(predicate::str::contains("escaped"));
}

#[test]
fn escape_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    maxsetup(&dir)
        .args(["escape", "nope.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn escape_all_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("src");
    write_file(&root, "a.txt", "it's\n");
    write_file(&root, "sub/b.txt", "x\\y");
    write_file(&root, ".git/config", "ignored");

    maxsetup(&dir)
        .args(["escape", "--all", "--root", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s)"));

    let tasks = root.join("tasks");
    assert_eq!(fs::read_to_string(tasks.join("a.txt.txt")).unwrap(), r"it\'s\n");
    assert_eq!(fs::read_to_string(tasks.join("sub/b.txt.txt")).unwrap(), r"x\\y");

    let summary: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(tasks.join("compressed_content.json")).unwrap())
            .unwrap();
    assert_eq!(
        summary.keys().collect::<Vec<_>>(),
        vec!["a.txt", "sub/b.txt"]
    );
    assert_eq!(summary["sub/b.txt"]["content"], "x\\y");
}

#[test]
fn escape_all_is_repeatable() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "only.txt", "1");

    for _ in 0..2 {
        maxsetup(&dir)
            .args(["escape", "--all"])
            .assert()
            .success();
    }
    let summary = fs::read_to_string(dir.path().join("tasks/compressed_content.json")).unwrap();
    assert!(summary.contains("only.txt"));
    assert!(!summary.contains("compressed_content"));
}
