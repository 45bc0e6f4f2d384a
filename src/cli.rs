//! Command-line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::gradient::Justify;

/// Gradient text, panels and project setup helpers
#[derive(Debug, Parser)]
#[command(name = "maxsetup")]
#[command(version, about = "Gradient text, panels and project setup helpers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase console log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project base directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub base: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a message with a random multi-stop gradient
    Gradient {
        message: String,

        /// Number of palette colors to interpolate between (2-10)
        #[arg(short, long)]
        stops: Option<usize>,

        #[arg(short, long, value_enum)]
        justify: Option<Justify>,

        /// Width used for justification (defaults to the terminal width)
        #[arg(short, long)]
        width: Option<usize>,

        /// Use consecutive palette colors starting at this index instead of random ones
        #[arg(long)]
        start: Option<usize>,

        /// Leave characters past the last full segment uncolored
        #[arg(long)]
        truncate: bool,
    },

    /// Print a message with the full ten-color palette
    Rainbow { message: String },

    /// Print a message inside a bordered panel
    Panel {
        message: String,

        /// Panel title, drawn with its own gradient
        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        subtitle: Option<String>,

        #[arg(short, long)]
        stops: Option<usize>,

        #[arg(short, long)]
        width: Option<usize>,

        #[arg(short, long, value_enum)]
        justify: Option<Justify>,
    },

    /// Classify a color (hex, rgb(), ANSI number or name) and show conversions
    Color { color: String },

    /// List the named ANSI colors
    Colors {
        /// Only show names containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Start a new run (bumps logs/run.txt)
    Run {
        /// Print the current run number without changing it
        #[arg(long, conflicts_with = "reset")]
        show: bool,

        /// Set the run counter back to 0
        #[arg(long)]
        reset: bool,
    },

    /// Create editor settings, spell-check config, .env and log files
    Init {
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,

        /// Show what would be created without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Escape a file's contents into a single-line string literal
    Escape {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        file: Option<PathBuf>,

        /// Escape every file under --root into the output directory
        #[arg(long)]
        all: bool,

        /// Directory walked by --all (defaults to the base directory)
        #[arg(long, requires = "all")]
        root: Option<PathBuf>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
