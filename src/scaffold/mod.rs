//! Project scaffolding.
//!
//! Materializes a fixed set of boilerplate files (editor configs, spell-check
//! dictionary, stylesheet, `.env`, log files) under a base directory. Existing
//! files are left alone unless `force` is set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the base directory's name.
const PROJECT_PLACEHOLDER: &str = "{project}";

/// Used when the base directory has no usable name (e.g. `/`).
const FALLBACK_PROJECT_NAME: &str = "project";

/// How a template's content is treated before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Must parse as JSON after substitution.
    Json,
    Env,
    Text,
    Css,
}

/// A file the scaffolder knows how to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Path relative to the base directory.
    pub path: &'static str,
    pub kind: TemplateKind,
    pub content: &'static str,
}

impl Template {
    /// Content with `{project}` replaced.
    pub fn render(&self, project: &str) -> String {
        self.content.replace(PROJECT_PLACEHOLDER, project)
    }
}

/// Every scaffolded file, in creation order.
pub const TEMPLATES: &[Template] = &[
    Template {
        path: ".vscode/launch.json",
        kind: TemplateKind::Json,
        content: include_str!("templates/launch.json"),
    },
    Template {
        path: ".vscode/settings.json",
        kind: TemplateKind::Json,
        content: include_str!("templates/settings.json"),
    },
    Template {
        path: ".vscode/tasks.json",
        kind: TemplateKind::Json,
        content: include_str!("templates/tasks.json"),
    },
    Template {
        path: ".env",
        kind: TemplateKind::Env,
        content: include_str!("templates/env"),
    },
    Template {
        path: ".gitignore",
        kind: TemplateKind::Text,
        content: include_str!("templates/gitignore"),
    },
    Template {
        path: "LICENSE",
        kind: TemplateKind::Text,
        content: include_str!("templates/LICENSE"),
    },
    Template {
        path: "config/cspell.json",
        kind: TemplateKind::Json,
        content: include_str!("templates/cspell.json"),
    },
    Template {
        path: "config/cspell.txt",
        kind: TemplateKind::Text,
        content: include_str!("templates/cspell.txt"),
    },
    Template {
        path: "static/style.css",
        kind: TemplateKind::Css,
        content: include_str!("templates/style.css"),
    },
    Template {
        path: "logs/run.txt",
        kind: TemplateKind::Text,
        content: "0",
    },
    Template {
        path: "logs/log.log",
        kind: TemplateKind::Text,
        content: "",
    },
    Template {
        path: "logs/verbose.log",
        kind: TemplateKind::Text,
        content: "",
    },
];

/// Errors that can occur while scaffolding.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template for {path} is not valid JSON: {source}")]
    InvalidTemplate {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Options for [`scaffold`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Overwrite files that already exist.
    pub force: bool,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
}

/// What [`scaffold`] did (or would do, for a dry run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Create every template under `base` that does not exist yet.
pub fn scaffold(base: &Path, options: &ScaffoldOptions) -> Result<ScaffoldReport, ScaffoldError> {
    if !options.dry_run {
        create_dir(base)?;
    }
    let project = project_name(base);
    let mut report = ScaffoldReport::default();

    for template in TEMPLATES {
        let path = base.join(template.path);
        if path.exists() && !options.force {
            tracing::debug!(path = %path.display(), "exists, skipping");
            report.skipped.push(path);
            continue;
        }

        let content = template.render(&project);
        if template.kind == TemplateKind::Json {
            serde_json::from_str::<serde_json::Value>(&content).map_err(|source| {
                ScaffoldError::InvalidTemplate {
                    path: path.clone(),
                    source,
                }
            })?;
        }

        if !options.dry_run {
            if let Some(parent) = path.parent() {
                create_dir(parent)?;
            }
            fs::write(&path, content).map_err(|source| ScaffoldError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "created");
        }
        report.created.push(path);
    }

    Ok(report)
}

/// Name substituted for `{project}`: the last component of `base`.
pub fn project_name(base: &Path) -> String {
    let resolved = fs::canonicalize(base).unwrap_or_else(|_| base.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string())
}

fn create_dir(dir: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(dir).map_err(|source| ScaffoldError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
