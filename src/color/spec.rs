//! Classification of user-supplied color strings.

use std::fmt;

use super::error::ColorError;
use super::rgb::Rgb;
use super::tables::{ansi_name, ansi_number};

/// The kind of a color string, as produced by [`ColorSpec::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// `#rrggbb` or bare `rrggbb`.
    Hex(Rgb),
    /// `rgb(r, g, b)`.
    Rgb(Rgb),
    /// `color(n)` or a bare ANSI number.
    Ansi(u8),
    /// A named color from the ANSI table, e.g. `deep_sky_blue1`.
    W3(String),
    /// Anything that matched none of the above.
    Invalid(String),
}

impl ColorSpec {
    /// Classify a color string.
    ///
    /// Strings that look like one of the known syntaxes but carry bad
    /// values (`rgb(300, 0, 0)`, `color(19)`) are still `Invalid`; use
    /// [`ColorSpec::parse`] to learn why.
    pub fn classify(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|_| Self::Invalid(input.to_string()))
    }

    /// Strict variant of [`ColorSpec::classify`] that reports why parsing failed.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();

        if let Some(inner) = function_args(trimmed, "rgb") {
            return parse_rgb_args(inner, input).map(Self::Rgb);
        }
        if let Some(inner) = function_args(trimmed, "color") {
            return parse_ansi(inner.trim(), input).map(Self::Ansi);
        }
        if (1..=3).contains(&trimmed.len()) && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return parse_ansi(trimmed, input).map(Self::Ansi);
        }
        if ansi_number(trimmed).is_some() {
            return Ok(Self::W3(trimmed.to_string()));
        }
        if trimmed.starts_with('#') || looks_like_bare_hex(trimmed) {
            return Rgb::from_hex(trimmed).map(Self::Hex);
        }

        Err(ColorError::InvalidColor(input.to_string()))
    }

    /// Short name of the variant, for display.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hex(_) => "hex",
            Self::Rgb(_) => "rgb",
            Self::Ansi(_) => "ansi",
            Self::W3(_) => "w3",
            Self::Invalid(_) => "invalid",
        }
    }

    /// RGB value of the color, if it has one.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Hex(rgb) | Self::Rgb(rgb) => Some(*rgb),
            Self::Ansi(n) => Some(Rgb::from_ansi(*n)),
            Self::W3(name) => ansi_number(name).map(Rgb::from_ansi),
            Self::Invalid(_) => None,
        }
    }

    /// ANSI number of the color. Exact for `Ansi`/`W3`, nearest match otherwise.
    pub fn to_ansi(&self) -> Option<u8> {
        match self {
            Self::Ansi(n) => Some(*n),
            Self::W3(name) => ansi_number(name),
            Self::Hex(rgb) | Self::Rgb(rgb) => Some(rgb.nearest_ansi()),
            Self::Invalid(_) => None,
        }
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(rgb) => write!(f, "{}", rgb.to_hex()),
            Self::Rgb(rgb) => write!(f, "{rgb}"),
            Self::Ansi(n) => write!(f, "color({n})"),
            Self::W3(name) => write!(f, "{name}"),
            Self::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

/// Whether a hex string is valid (`#rrggbb` or `rrggbb`).
pub fn valid_hex(color: &str) -> bool {
    Rgb::from_hex(color).is_ok()
}

/// Returns the text between `name(` and a trailing `)`.
fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn looks_like_bare_hex(input: &str) -> bool {
    input.len() == 6 && input.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_rgb_args(args: &str, raw: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidRgbColor(raw.to_string());
    let channels = args
        .split(',')
        .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
        _ => Err(invalid()),
    }
}

fn parse_ansi(digits: &str, raw: &str) -> Result<u8, ColorError> {
    digits
        .parse::<u8>()
        .ok()
        .filter(|n| ansi_name(*n).is_some())
        .ok_or_else(|| ColorError::InvalidColor(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognizes_each_syntax() {
        assert_eq!(
            ColorSpec::classify("#ff00ff"),
            ColorSpec::Hex(Rgb::new(255, 0, 255))
        );
        assert_eq!(
            ColorSpec::classify("af00ff"),
            ColorSpec::Hex(Rgb::new(175, 0, 255))
        );
        assert_eq!(
            ColorSpec::classify("rgb(1, 2, 3)"),
            ColorSpec::Rgb(Rgb::new(1, 2, 3))
        );
        assert_eq!(ColorSpec::classify("color(129)"), ColorSpec::Ansi(129));
        assert_eq!(ColorSpec::classify("57"), ColorSpec::Ansi(57));
        assert_eq!(
            ColorSpec::classify("blue_violet"),
            ColorSpec::W3("blue_violet".to_string())
        );
    }

    #[test]
    fn classify_marks_unknown_input_invalid() {
        assert_eq!(
            ColorSpec::classify("chartreuse"),
            ColorSpec::Invalid("chartreuse".to_string())
        );
        assert_eq!(ColorSpec::classify("").kind(), "invalid");
    }

    #[test]
    fn parse_reports_specific_errors() {
        assert_eq!(
            ColorSpec::parse("rgb(300, 0, 0)"),
            Err(ColorError::InvalidRgbColor("rgb(300, 0, 0)".to_string()))
        );
        assert_eq!(
            ColorSpec::parse("rgb(1, 2)"),
            Err(ColorError::InvalidRgbColor("rgb(1, 2)".to_string()))
        );
        assert_eq!(
            ColorSpec::parse("#12345"),
            Err(ColorError::InvalidHexColor("#12345".to_string()))
        );
        assert_eq!(
            ColorSpec::parse("color(19)"),
            Err(ColorError::InvalidColor("color(19)".to_string()))
        );
        assert_eq!(
            ColorSpec::parse("256"),
            Err(ColorError::InvalidColor("256".to_string()))
        );
    }

    #[test]
    fn six_digit_numbers_are_hex_not_ansi() {
        assert_eq!(
            ColorSpec::classify("000000"),
            ColorSpec::Hex(Rgb::new(0, 0, 0))
        );
    }

    #[test]
    fn conversions_follow_the_variant() {
        let w3 = ColorSpec::classify("magenta1");
        assert_eq!(w3.to_ansi(), Some(201));
        assert_eq!(w3.to_rgb(), Some(Rgb::new(255, 0, 255)));

        let hex = ColorSpec::classify("#af00ff");
        assert_eq!(hex.to_ansi(), Some(129));

        assert_eq!(ColorSpec::classify("nope").to_rgb(), None);
    }

    #[test]
    fn valid_hex_matches_from_hex() {
        assert!(valid_hex("#00ff00"));
        assert!(!valid_hex("green"));
    }
}
