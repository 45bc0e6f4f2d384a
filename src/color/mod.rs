//! Color tables, conversions and classification.
//!
//! - [`tables`] - ANSI number <-> name lookup tables
//! - [`rgb`] - the [`Rgb`] triple and hex/ANSI conversions
//! - [`spec`] - [`ColorSpec`], the tagged union produced from user input

mod error;
mod rgb;
mod spec;
pub mod tables;

pub use error::ColorError;
pub use rgb::Rgb;
pub use spec::{valid_hex, ColorSpec};
pub use tables::{ansi_name, ansi_number, valid_ansi_number, valid_w3, ANSI_COLORS, COLORS_ANSI};
