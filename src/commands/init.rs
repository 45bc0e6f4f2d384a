//! Project scaffolding handler

use std::path::Path;

use anyhow::{Context, Result};

use maxsetup::scaffold::{scaffold, ScaffoldOptions};
use maxsetup::theme::current_theme;

#[cfg(not(tarpaulin_include))]
pub fn handle_init(base: &Path, force: bool, dry_run: bool) -> Result<()> {
    let theme = current_theme();
    let report = scaffold(base, &ScaffoldOptions { force, dry_run })
        .with_context(|| format!("Failed to scaffold {}", base.display()))?;

    let verb = if dry_run { "would create" } else { "created" };
    for path in &report.created {
        println!("{} {}", theme.success_text(verb), relative(base, path));
    }
    for path in &report.skipped {
        println!("{} {}", theme.secondary_text("exists"), relative(base, path));
    }
    if report.is_noop() {
        println!(
            "{}",
            theme.primary_text("Nothing to do. Use --force to overwrite existing files.")
        );
    }
    Ok(())
}

fn relative(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
