//! Subcommand handlers

pub mod color;
pub mod completions;
pub mod config;
pub mod escape;
pub mod gradient;
pub mod init;
pub mod run;
