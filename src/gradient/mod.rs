//! Gradient text colorizer.
//!
//! Picks a run of stops from a fixed palette (starting at a random offset),
//! splits the text into equal segments and blends each character's color
//! linearly between the segment's two stops.
//!
//! - [`styled_text`] - the [`StyledText`] output and its renderers
//! - [`panel`] - bordered boxes around styled text

pub mod panel;
pub mod styled_text;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

pub use panel::{default_width, gradient_panel, Panel, PanelOptions, DEFAULT_BORDER};
pub use styled_text::{StyledSegment, StyledText};

/// The gradient palette, walked forward (with wrap-around) from a random start.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0xff, 0x00, 0xff), // magenta
    Rgb::new(0xaf, 0x00, 0xff), // purple
    Rgb::new(0x5f, 0x00, 0xff), // violet
    Rgb::new(0x00, 0x00, 0xff), // blue
    Rgb::new(0x00, 0x88, 0xff), // light blue
    Rgb::new(0x00, 0xff, 0xff), // cyan
    Rgb::new(0x00, 0xff, 0x00), // green
    Rgb::new(0xff, 0xff, 0x00), // yellow
    Rgb::new(0xff, 0x88, 0x00), // orange
    Rgb::new(0xff, 0x00, 0x00), // red
];

/// Fewest stops that still form a segment.
pub const MIN_STOPS: usize = 2;

/// Stop count used when the caller does not pick one.
pub const DEFAULT_STOPS: usize = 3;

/// Errors from gradient construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Horizontal alignment applied when styled text is rendered into a fixed width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl Justify {
    /// Left and right padding needed to fit `content` columns into `width`.
    pub fn padding(self, content: usize, width: usize) -> (usize, usize) {
        let free = width.saturating_sub(content);
        match self {
            Self::Left => (0, free),
            Self::Center => (free / 2, free - free / 2),
            Self::Right => (free, 0),
        }
    }
}

/// What happens to the characters left over when the message length is not
/// a multiple of the segment count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RemainderPolicy {
    /// Fold the leftovers into the last segment so every character is colored.
    #[default]
    Distribute,
    /// Leave the leftovers uncolored.
    Truncate,
}

/// A pair of adjacent stops bounding one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStop {
    pub start: Rgb,
    pub end: Rgb,
}

impl ColorStop {
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Blend at position `t` in `0.0..=1.0`.
    pub fn at(&self, t: f32) -> Rgb {
        self.start.lerp(self.end, t)
    }
}

/// Check that a stop count can be served by [`PALETTE`].
pub fn validate_stop_count(stop_count: usize) -> Result<(), GradientError> {
    if stop_count > PALETTE.len() {
        return Err(GradientError::InvalidArgument(format!(
            "stop count exceeds palette size ({stop_count} > {})",
            PALETTE.len()
        )));
    }
    if stop_count < MIN_STOPS {
        return Err(GradientError::InvalidArgument(format!(
            "stop count must be at least {MIN_STOPS} (got {stop_count})"
        )));
    }
    Ok(())
}

/// Gradient settings.
///
/// ```
/// use maxsetup::gradient::{Gradient, Justify};
///
/// let text = Gradient::new(3)?.justify(Justify::Center).start_at(0).apply("hello");
/// assert_eq!(text.colored_len(), 5);
/// # Ok::<(), maxsetup::gradient::GradientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    stop_count: usize,
    justify: Justify,
    remainder: RemainderPolicy,
    start: Option<usize>,
}

impl Gradient {
    /// Fails with [`GradientError::InvalidArgument`] unless `2 <= stop_count <= 10`.
    pub fn new(stop_count: usize) -> Result<Self, GradientError> {
        validate_stop_count(stop_count)?;
        Ok(Self {
            stop_count,
            justify: Justify::default(),
            remainder: RemainderPolicy::default(),
            start: None,
        })
    }

    /// Every palette color, in order from a random start.
    pub fn rainbow() -> Self {
        Self {
            stop_count: PALETTE.len(),
            justify: Justify::Left,
            remainder: RemainderPolicy::default(),
            start: None,
        }
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Pin the palette start instead of drawing it at random. Wraps modulo the palette size.
    pub fn start_at(mut self, index: usize) -> Self {
        self.start = Some(index % PALETTE.len());
        self
    }

    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    /// The stop colors, starting at the pinned index or one drawn from `rng`.
    pub fn stops<R: Rng>(&self, rng: &mut R) -> Vec<Rgb> {
        let len = PALETTE.len();
        let start = self.start.unwrap_or_else(|| rng.gen_range(0..len));
        tracing::trace!(start, stop_count = self.stop_count, "selected palette start");
        (0..self.stop_count)
            .map(|i| PALETTE[(start + i) % len])
            .collect()
    }

    /// Colorize `message` using the thread-local RNG for the palette start.
    pub fn apply(&self, message: &str) -> StyledText {
        self.apply_with_rng(message, &mut rand::thread_rng())
    }

    /// Colorize `message`, drawing the palette start from `rng`.
    pub fn apply_with_rng<R: Rng>(&self, message: &str, rng: &mut R) -> StyledText {
        let chars: Vec<char> = message.chars().collect();
        let stops = self.stops(rng);
        let pairs: Vec<ColorStop> = stops
            .windows(2)
            .map(|w| ColorStop::new(w[0], w[1]))
            .collect();
        let segment_len = chars.len() / pairs.len();

        let mut segments = Vec::with_capacity(pairs.len());
        let mut offset = 0;
        for (i, pair) in pairs.iter().enumerate() {
            let is_last = i + 1 == pairs.len();
            let len = match self.remainder {
                RemainderPolicy::Distribute if is_last => chars.len() - offset,
                _ => segment_len,
            };
            if len == 0 {
                continue;
            }

            let text: String = chars[offset..offset + len].iter().collect();
            let colors = (0..len)
                .map(|j| pair.at(j as f32 / len as f32))
                .collect();
            segments.push(StyledSegment::new(offset, text, colors));
            offset += len;
        }

        let tail: String = chars[offset..].iter().collect();
        StyledText::from_parts(segments, tail, self.justify)
    }
}

/// Colorize `message` with `stop_count` palette stops from a random start.
pub fn gradient(
    message: &str,
    stop_count: usize,
    justify: Justify,
) -> Result<StyledText, GradientError> {
    Ok(Gradient::new(stop_count)?.justify(justify).apply(message))
}

/// [`gradient`] across the whole palette, left-justified.
pub fn rainbow(message: &str) -> StyledText {
    Gradient::rainbow().apply(message)
}
