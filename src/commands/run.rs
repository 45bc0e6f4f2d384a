//! Run counter handler

use std::path::Path;

use anyhow::Result;

use maxsetup::theme::current_theme;
use maxsetup::{Config, RunCounter};

/// Start a new run, or show/reset the counter.
#[cfg(not(tarpaulin_include))]
pub fn handle_run(config: &Config, base: &Path, show: bool, reset: bool) -> Result<()> {
    let counter = RunCounter::for_project(base, &config.logging.directory);
    let theme = current_theme();

    if reset {
        counter.reset()?;
        println!("{}", theme.success_text("Run counter reset to 0"));
        return Ok(());
    }
    if show {
        println!("{}", counter.current()?);
        return Ok(());
    }

    let run = counter.increment()?;
    tracing::info!(run, "{}", banner(run));
    println!("{}", theme.accent_text(&format!("Run {run}")));
    Ok(())
}

/// Separator line written to the logs at the start of each run.
fn banner(run: u64) -> String {
    let label = format!(" Run {run} ");
    format!("{label:=^60}")
}
