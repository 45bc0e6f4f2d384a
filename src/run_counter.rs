//! Persistent run counter.
//!
//! Each toolkit run bumps an integer stored in `logs/run.txt` so log lines
//! from different runs can be told apart.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the counter file inside the logs directory.
pub const RUN_FILE: &str = "run.txt";

/// Errors from reading or writing the counter file.
#[derive(Debug, thiserror::Error)]
pub enum RunCounterError {
    #[error("Failed to access run counter at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Run counter at {path} is not a number: {content:?}")]
    Corrupt { path: PathBuf, content: String },
}

/// Reads and updates the run counter file.
///
/// Constructed once at startup and passed to whatever needs it.
#[derive(Debug, Clone)]
pub struct RunCounter {
    path: PathBuf,
}

impl RunCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Counter at `<base>/<logs_dir>/run.txt`.
    pub fn for_project(base: &Path, logs_dir: &Path) -> Self {
        Self::new(base.join(logs_dir).join(RUN_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored run number. A missing or empty file counts as run 0.
    pub fn current(&self) -> Result<u64, RunCounterError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(RunCounterError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse().map_err(|_| RunCounterError::Corrupt {
            path: self.path.clone(),
            content: trimmed.to_string(),
        })
    }

    /// Bump the counter and return the new run number.
    pub fn increment(&self) -> Result<u64, RunCounterError> {
        let next = self.current()? + 1;
        self.write(next)?;
        tracing::debug!(run = next, path = %self.path.display(), "run counter incremented");
        Ok(next)
    }

    /// Set the counter back to 0.
    pub fn reset(&self) -> Result<(), RunCounterError> {
        self.write(0)
    }

    fn write(&self, value: u64) -> Result<(), RunCounterError> {
        let io_err = |source: io::Error| RunCounterError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, value.to_string()).map_err(io_err)
    }
}
