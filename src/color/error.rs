//! Color parsing errors.

/// Errors raised when a color string cannot be parsed.
///
/// These are hard failures: malformed input is never coerced into a
/// nearby color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    #[error("Invalid RGB color: {0}")]
    InvalidRgbColor(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
