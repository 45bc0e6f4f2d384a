//! Shared helpers for integration tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// A `maxsetup` command isolated from the user's environment: no color,
/// no `RUST_LOG`, config read from `<dir>/config.toml`, cwd set to `dir`.
pub fn maxsetup(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("maxsetup").expect("maxsetup binary is built");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("MAXSETUP_CONFIG", dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

/// Run `maxsetup` in `dir` and capture (stdout, stderr, exit code).
pub fn run_maxsetup(dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = maxsetup(dir)
        .args(args)
        .output()
        .expect("Failed to execute maxsetup");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write `content` to `<dir>/config.toml`.
pub fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("config.toml"), content).unwrap();
}

/// Create `path` (and its parents) under `root` with `content`.
pub fn write_file(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, content).unwrap();
}
