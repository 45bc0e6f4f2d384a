//! Tracing subscriber setup.
//!
//! Console output goes to stderr at `warn` (raised by `-v`, overridden by
//! `RUST_LOG`). When the project has a logs directory, two more sinks are
//! attached: `log.log` and `verbose.log`, with their own level filters.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// File name of the regular log sink.
pub const LOG_FILE: &str = "log.log";

/// File name of the verbose log sink.
pub const VERBOSE_LOG_FILE: &str = "verbose.log";

/// Keeps the non-blocking file writers alive. Dropping it flushes the files.
#[derive(Debug, Default)]
pub struct LogGuard {
    guards: Vec<WorkerGuard>,
}

/// Console level for a `-v` count.
pub fn console_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// File sinks are only attached when `<base>/<config.directory>` exists, so
/// running outside a scaffolded project never creates log files.
pub fn init(config: &LoggingConfig, base: &Path, verbosity: u8, ansi: bool) -> Result<LogGuard> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level(verbosity)));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .with_filter(console_filter);

    let logs_dir = base.join(&config.directory);
    let mut guards = Vec::new();
    let (log_layer, verbose_layer) = if logs_dir.is_dir() {
        let (log_writer, log_guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(&logs_dir, LOG_FILE));
        let (verbose_writer, verbose_guard) = tracing_appender::non_blocking(
            tracing_appender::rolling::never(&logs_dir, VERBOSE_LOG_FILE),
        );
        guards.push(log_guard);
        guards.push(verbose_guard);

        let log_filter = EnvFilter::try_new(&config.file_level)
            .with_context(|| format!("Invalid logging.file_level '{}'", config.file_level))?;
        let verbose_filter = EnvFilter::try_new(&config.verbose_level).with_context(|| {
            format!("Invalid logging.verbose_level '{}'", config.verbose_level)
        })?;

        let log_layer = fmt::layer()
            .with_writer(log_writer)
            .with_ansi(false)
            .with_filter(log_filter);
        let verbose_layer = fmt::layer()
            .with_writer(verbose_writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(verbose_filter);
        (Some(log_layer), Some(verbose_layer))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console)
        .with(log_layer)
        .with(verbose_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let guard = LogGuard { guards };
    if !guard.guards.is_empty() {
        tracing::debug!(dir = %logs_dir.display(), "file logging enabled");
    }
    Ok(guard)
}
