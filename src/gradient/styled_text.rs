//! Per-character colored text and its renderers.
//!
//! A [`StyledText`] is what the gradient produces: colored segments in
//! message order followed by an optional uncolored tail. It renders to an
//! ANSI truecolor string or to a ratatui [`Line`].

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::Justify;
use crate::color::Rgb;

/// ANSI reset sequence
pub(crate) const ANSI_RESET: &str = "\x1b[0m";

/// A contiguous run of characters with one color per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    start: usize,
    text: String,
    colors: Vec<Rgb>,
}

impl StyledSegment {
    /// `colors` must hold one entry per `char` of `text`.
    pub fn new(start: usize, text: String, colors: Vec<Rgb>) -> Self {
        debug_assert_eq!(text.chars().count(), colors.len());
        Self {
            start,
            text,
            colors,
        }
    }

    /// Character offset of the segment within the whole text.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = (char, Rgb)> + '_ {
        self.text.chars().zip(self.colors.iter().copied())
    }
}

/// Text where each character optionally carries a foreground color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    segments: Vec<StyledSegment>,
    tail: String,
    justify: Justify,
}

impl StyledText {
    pub(crate) fn from_parts(segments: Vec<StyledSegment>, tail: String, justify: Justify) -> Self {
        Self {
            segments,
            tail,
            justify,
        }
    }

    /// Uncolored text.
    pub fn plain(text: &str) -> Self {
        Self::from_parts(Vec::new(), text.to_string(), Justify::Left)
    }

    /// Text in a single color.
    pub fn solid(text: &str, color: Rgb) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        let colors = vec![color; text.chars().count()];
        Self::from_parts(
            vec![StyledSegment::new(0, text.to_string(), colors)],
            String::new(),
            Justify::Left,
        )
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn segments(&self) -> &[StyledSegment] {
        &self.segments
    }

    /// Trailing characters that carry no color.
    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn justify(&self) -> Justify {
        self.justify
    }

    /// Total length in characters.
    pub fn len(&self) -> usize {
        self.colored_len() + self.tail.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of characters with an explicit color.
    pub fn colored_len(&self) -> usize {
        self.segments.iter().map(StyledSegment::len).sum()
    }

    /// Every character in order with its color, if any.
    pub fn chars(&self) -> impl Iterator<Item = (char, Option<Rgb>)> + '_ {
        self.segments
            .iter()
            .flat_map(|s| s.chars().map(|(c, rgb)| (c, Some(rgb))))
            .chain(self.tail.chars().map(|c| (c, None)))
    }

    /// The text with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.chars().map(|(c, _)| c).collect()
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.plain_text().width()
    }

    /// Render with ANSI truecolor escapes.
    pub fn to_ansi(&self) -> String {
        self.render(true)
    }

    /// Render into `width` columns, padded according to the text's justification.
    pub fn to_ansi_aligned(&self, width: usize) -> String {
        let (left, right) = self.justify.padding(self.width(), width);
        format!("{}{}{}", " ".repeat(left), self.to_ansi(), " ".repeat(right))
    }

    /// Render with escapes, or as plain text when `colored` is false.
    pub fn render(&self, colored: bool) -> String {
        render_cells(self.chars(), colored)
    }

    /// [`render`](Self::render) shifted right for center and right
    /// justification. No trailing padding.
    pub fn render_aligned(&self, width: usize, colored: bool) -> String {
        let (left, _) = self.justify.padding(self.width(), width);
        format!("{}{}", " ".repeat(left), self.render(colored))
    }

    /// Convert to a ratatui line, one span per colored character.
    pub fn to_line(&self) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = self
            .segments
            .iter()
            .flat_map(|s| s.chars())
            .map(|(c, rgb)| Span::styled(c.to_string(), Style::default().fg(rgb.into())))
            .collect();
        if !self.tail.is_empty() {
            spans.push(Span::raw(self.tail.clone()));
        }

        let alignment = match self.justify {
            Justify::Left => Alignment::Left,
            Justify::Center => Alignment::Center,
            Justify::Right => Alignment::Right,
        };
        Line::from(spans).alignment(alignment)
    }
}

/// Render `(char, color)` cells. Colors are dropped when `colored` is false.
pub(crate) fn render_cells(
    cells: impl IntoIterator<Item = (char, Option<Rgb>)>,
    colored: bool,
) -> String {
    let mut out = String::new();
    let mut current: Option<Rgb> = None;
    for (c, rgb) in cells {
        let rgb = rgb.filter(|_| colored);
        if rgb != current {
            match rgb {
                Some(rgb) => out.push_str(&rgb.ansi_fg()),
                None => out.push_str(ANSI_RESET),
            }
            current = rgb;
        }
        out.push(c);
    }
    if current.is_some() {
        out.push_str(ANSI_RESET);
    }
    out
}

/// Display width of a single cell.
pub(crate) fn cell_width(c: char) -> usize {
    c.width().unwrap_or(0)
}
