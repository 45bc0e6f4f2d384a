//! Escaping file contents into string literals.
//!
//! Used to paste files (templates, stylesheets) into source code or docs as
//! a single-line literal.

use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the JSON summary written by [`compress_tree`].
pub const SUMMARY_FILE: &str = "compressed_content.json";

/// Errors that can occur while escaping files.
#[derive(Debug, thiserror::Error)]
pub enum EscapeError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize escaped content: {0}")]
    Json(#[from] serde_json::Error),
}

/// Directory walk and output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeOptions {
    /// Directory names that are never descended into.
    pub ignore_dirs: Vec<String>,
    /// File names that are never escaped.
    pub ignore_files: Vec<String>,
    /// Output directory, relative to the walked root.
    pub output_dir: PathBuf,
}

impl Default for EscapeOptions {
    fn default() -> Self {
        Self {
            ignore_dirs: ["__pycache__", ".git", "target", "tasks"]
                .map(String::from)
                .to_vec(),
            ignore_files: [".DS_Store", SUMMARY_FILE].map(String::from).to_vec(),
            output_dir: PathBuf::from("tasks"),
        }
    }
}

/// One escaped file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapedFile {
    pub path: PathBuf,
    pub content: String,
    pub escaped_content: String,
}

/// Escape `content` so it can sit inside a quoted string literal.
///
/// Backslashes are doubled first, then four-space indents and tab
/// characters become `\t`, line breaks become `\r`/`\n` and both quote
/// styles are backslash-escaped.
pub fn escape(content: &str) -> String {
    content
        .replace('\\', r"\\")
        .replace("    ", r"\t")
        .replace('\t', r"\t")
        .replace('\r', r"\r")
        .replace('\n', r"\n")
        .replace('"', r#"\""#)
        .replace('\'', r"\'")
}

/// Read and escape a single file.
pub fn escape_file(path: &Path) -> Result<EscapedFile, EscapeError> {
    let content = fs::read_to_string(path).map_err(|source| EscapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(EscapedFile {
        path: path.to_path_buf(),
        escaped_content: escape(&content),
        content,
    })
}

/// Breadth-first list of files under `root`, skipping ignored names. Sorted.
///
/// Symlinked files are included; symlinked directories and dangling links
/// are skipped.
pub fn collect_files(root: &Path, options: &EscapeOptions) -> Result<Vec<PathBuf>, EscapeError> {
    let output_dir = root.join(&options.output_dir);
    let mut files = Vec::new();
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let entries = fs::read_dir(&dir).map_err(|source| EscapeError::Io {
            path: dir.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| EscapeError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry.file_type().map_err(|source| EscapeError::Io {
                path: path.clone(),
                source,
            })?;

            if file_type.is_symlink() && !path.is_file() {
                tracing::warn!(path = %path.display(), "symlink to a directory or missing target, skipping");
            } else if file_type.is_dir() {
                if !options.ignore_dirs.contains(&name) && path != output_dir {
                    queue.push_back(path);
                }
            } else if !options.ignore_files.contains(&name) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Escape every text file under `root`.
///
/// Writes `<output_dir>/<relative path>.txt` per file, mirroring the tree,
/// plus a [`SUMMARY_FILE`] holding all entries, keyed by relative path.
/// Files that are not valid UTF-8 are skipped with a warning.
pub fn compress_tree(
    root: &Path,
    options: &EscapeOptions,
) -> Result<BTreeMap<String, EscapedFile>, EscapeError> {
    let output_dir = root.join(&options.output_dir);
    fs::create_dir_all(&output_dir).map_err(|source| EscapeError::Io {
        path: output_dir.clone(),
        source,
    })?;

    let mut escaped = BTreeMap::new();
    for path in collect_files(root, options)? {
        let file = match escape_file(&path) {
            Ok(file) => file,
            Err(EscapeError::Io { source, .. }) if source.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(path = %path.display(), "not UTF-8, skipping");
                continue;
            }
            Err(e) => return Err(e),
        };

        let key = relative_key(root, &path);
        let out_path = output_dir.join(format!("{key}.txt"));
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|source| EscapeError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&out_path, &file.escaped_content).map_err(|source| EscapeError::Io {
            path: out_path.clone(),
            source,
        })?;
        tracing::info!(file = %key, "escaped");
        escaped.insert(key, file);
    }

    let summary_path = output_dir.join(SUMMARY_FILE);
    let json = serde_json::to_string_pretty(&escaped)?;
    fs::write(&summary_path, json).map_err(|source| EscapeError::Io {
        path: summary_path,
        source,
    })?;

    Ok(escaped)
}

/// `path` relative to `root`, always with `/` separators.
fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
