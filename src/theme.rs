//! Theme configuration for CLI output
//!
//! Centralizes the colors used for status messages, labels and hints.
//! Every helper returns plain text when the theme is disabled, which is how
//! `NO_COLOR` and non-tty output are honored.

use ratatui::style::Color;

use crate::color::Rgb;

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Colors for CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for labels and headings
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    /// When false, every helper returns its input unchanged.
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Magenta,
            error: Color::Red,
            success: Color::Green,
            enabled: true,
        }
    }
}

impl Theme {
    /// Same colors, no escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }

    /// Truecolor foreground, for swatches.
    pub fn rgb_text(&self, color: Rgb, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color.ansi_fg(), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> String {
    match color {
        Color::Black => "\x1b[30m".to_string(),
        Color::Red => "\x1b[31m".to_string(),
        Color::Green => "\x1b[32m".to_string(),
        Color::Yellow => "\x1b[33m".to_string(),
        Color::Blue => "\x1b[34m".to_string(),
        Color::Magenta => "\x1b[35m".to_string(),
        Color::Cyan => "\x1b[36m".to_string(),
        Color::Gray => "\x1b[37m".to_string(),
        Color::DarkGray => "\x1b[90m".to_string(),
        Color::LightRed => "\x1b[91m".to_string(),
        Color::LightGreen => "\x1b[92m".to_string(),
        Color::LightYellow => "\x1b[93m".to_string(),
        Color::LightBlue => "\x1b[94m".to_string(),
        Color::LightMagenta => "\x1b[95m".to_string(),
        Color::LightCyan => "\x1b[96m".to_string(),
        Color::White => "\x1b[97m".to_string(),
        Color::Indexed(n) => format!("\x1b[38;5;{n}m"),
        Color::Rgb(r, g, b) => Rgb::new(r, g, b).ansi_fg(),
        _ => String::new(),
    }
}

/// Whether output to stdout should carry color.
///
/// Off when `NO_COLOR` is set (to anything non-empty) or stdout is not a tty.
pub fn color_enabled() -> bool {
    use crossterm::tty::IsTty;

    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    !no_color && std::io::stdout().is_tty()
}

/// Theme for the current process.
pub fn current_theme() -> Theme {
    if color_enabled() {
        Theme::default()
    } else {
        Theme::plain()
    }
}
