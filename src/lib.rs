//! maxsetup - gradient text, bordered panels and small project setup helpers
//!
//! - [`gradient`] - multi-stop palette gradients and panels
//! - [`color`] - color parsing, classification and the ANSI name table
//! - [`scaffold`] - boilerplate project files
//! - [`escape`] - file contents as single-line string literals
//! - [`run_counter`] - persistent run numbering for log files

pub mod cli;
pub mod color;
pub mod config;
pub mod escape;
pub mod gradient;
pub mod logging;
pub mod run_counter;
pub mod scaffold;
pub mod theme;

pub use cli::{Cli, Commands, ConfigCommands};
pub use config::Config;
pub use gradient::{gradient, rainbow, Gradient, GradientError, Justify, StyledText};
pub use run_counter::RunCounter;
