//! maxsetup CLI entry point

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;

use maxsetup::theme::current_theme;
use maxsetup::{logging, Cli, Commands, Config, ConfigCommands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", current_theme().error_text("Error:"), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<()> {
    // These must work even when the config file is broken.
    let config = match &cli.command {
        Commands::Config(ConfigCommands::Path) => return commands::config::handle_path(),
        Commands::Config(ConfigCommands::Init { force }) => {
            return commands::config::handle_init(*force)
        }
        _ => Config::load()?,
    };
    let base = match cli.base {
        Some(base) => base,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let _guard = logging::init(&config.logging, &base, cli.verbose, stderr_ansi())?;
    tracing::debug!(base = %base.display(), "starting");

    match cli.command {
        Commands::Gradient {
            message,
            stops,
            justify,
            width,
            start,
            truncate,
        } => commands::gradient::handle_gradient(
            &config, &message, stops, justify, width, start, truncate,
        ),
        Commands::Rainbow { message } => commands::gradient::handle_rainbow(&message),
        Commands::Panel {
            message,
            title,
            subtitle,
            stops,
            width,
            justify,
        } => commands::gradient::handle_panel(
            &config, &message, title, subtitle, stops, width, justify,
        ),
        Commands::Color { color } => commands::color::handle_color(&color),
        Commands::Colors { filter } => commands::color::handle_colors(filter.as_deref()),
        Commands::Run { show, reset } => commands::run::handle_run(&config, &base, show, reset),
        Commands::Init { force, dry_run } => commands::init::handle_init(&base, force, dry_run),
        Commands::Escape { file, all, root } => match file {
            Some(file) if !all => commands::escape::handle_escape_file(&config, &file),
            _ => {
                let root: PathBuf = root.unwrap_or_else(|| base.clone());
                commands::escape::handle_escape_all(&config, &root)
            }
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle_completions(shell),
    }
}

/// Console log lines carry color only on a tty and without `NO_COLOR`.
fn stderr_ansi() -> bool {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    !no_color && std::io::stderr().is_tty()
}
