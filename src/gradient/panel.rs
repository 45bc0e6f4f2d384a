//! Bordered panels around styled text.

use terminal_size::{terminal_size, Width};

use super::styled_text::{cell_width, render_cells, ANSI_RESET};
use super::{gradient, GradientError, Justify, StyledText, DEFAULT_STOPS};
use crate::color::Rgb;

/// Narrowest panel that still fits a border, padding and a couple of columns.
const MIN_WIDTH: usize = 8;

/// Width used when the terminal size cannot be detected (e.g. piped output).
const FALLBACK_WIDTH: usize = 80;

/// Border color used when none is configured.
pub const DEFAULT_BORDER: Rgb = Rgb::new(0x80, 0x80, 0x80);

type Cell = (char, Option<Rgb>);

/// Current terminal width, or 80 columns when it cannot be detected.
pub fn default_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .unwrap_or(FALLBACK_WIDTH)
}

/// Options for [`gradient_panel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Total width including the border. `None` uses the terminal width.
    pub width: Option<usize>,
    pub justify: Justify,
    /// Stop count for the title and subtitle gradients.
    pub title_stops: usize,
    pub border: Rgb,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            width: None,
            justify: Justify::Left,
            title_stops: DEFAULT_STOPS,
            border: DEFAULT_BORDER,
        }
    }
}

/// A rounded box with optional title (top edge, centered) and subtitle
/// (bottom edge, right-aligned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    body: StyledText,
    title: Option<StyledText>,
    subtitle: Option<StyledText>,
    width: usize,
    border: Rgb,
    justify: Justify,
}

impl Panel {
    /// Panel sized to the terminal, aligned like `body`.
    pub fn new(body: StyledText) -> Self {
        Self {
            justify: body.justify(),
            body,
            title: None,
            subtitle: None,
            width: default_width().max(MIN_WIDTH),
            border: DEFAULT_BORDER,
        }
    }

    pub fn title(mut self, title: StyledText) -> Self {
        self.title = Some(title);
        self
    }

    pub fn subtitle(mut self, subtitle: StyledText) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Total width in columns, border included. Clamped to a small minimum.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    pub fn border(mut self, border: Rgb) -> Self {
        self.border = border;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Total width in columns.
    pub fn total_width(&self) -> usize {
        self.width
    }

    /// Rendered rows. Every row is exactly [`Panel::total_width`] columns wide.
    pub fn lines(&self, colored: bool) -> Vec<String> {
        let inner = self.width - 4;
        let mut out = Vec::new();

        out.push(self.edge('╭', '╮', self.title.as_ref(), Justify::Center, colored));
        for line in wrap(self.body.chars(), inner) {
            let line_width: usize = line.iter().map(|(c, _)| cell_width(*c)).sum();
            let (left, right) = self.justify.padding(line_width, inner);
            out.push(format!(
                "{}{}{}{}{}",
                self.paint("│ ", colored),
                " ".repeat(left),
                render_cells(line, colored),
                " ".repeat(right),
                self.paint(" │", colored),
            ));
        }
        out.push(self.edge('╰', '╯', self.subtitle.as_ref(), Justify::Right, colored));
        out
    }

    /// The panel as one string, rows joined with newlines.
    pub fn render(&self, colored: bool) -> String {
        self.lines(colored).join("\n")
    }

    /// Two panels next to each other, separated by one column.
    pub fn side_by_side(left: &Panel, right: &Panel, colored: bool) -> String {
        let left_lines = left.lines(colored);
        let right_lines = right.lines(colored);
        let rows = left_lines.len().max(right_lines.len());

        (0..rows)
            .map(|i| {
                let l = left_lines
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| " ".repeat(left.width));
                let r = right_lines.get(i).map(String::as_str).unwrap_or("");
                format!("{l} {r}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paint(&self, s: &str, colored: bool) -> String {
        if colored {
            format!("{}{}{}", self.border.ansi_fg(), s, ANSI_RESET)
        } else {
            s.to_string()
        }
    }

    fn edge(
        &self,
        left: char,
        right: char,
        label: Option<&StyledText>,
        placement: Justify,
        colored: bool,
    ) -> String {
        let span = self.width - 2;
        let Some(label) = label.filter(|l| !l.is_empty()) else {
            return self.paint(&format!("{left}{}{right}", "─".repeat(span)), colored);
        };

        let cells = truncate(label.chars(), span - 4);
        let label_width: usize = cells.iter().map(|(c, _)| cell_width(*c)).sum();
        let free = span - label_width - 2;
        let (lead, trail) = match placement {
            Justify::Left => (1, free - 1),
            Justify::Center => (free / 2, free - free / 2),
            Justify::Right => (free - 1, 1),
        };

        format!(
            "{} {} {}",
            self.paint(&format!("{left}{}", "─".repeat(lead)), colored),
            render_cells(cells, colored),
            self.paint(&format!("{}{right}", "─".repeat(trail)), colored),
        )
    }
}

/// Colorize `message` and frame it in a panel with gradient title and subtitle.
pub fn gradient_panel(
    message: &str,
    stop_count: usize,
    options: &PanelOptions,
) -> Result<Panel, GradientError> {
    let body = gradient(message, stop_count, options.justify)?;
    let mut panel = Panel::new(body)
        .border(options.border)
        .width(options.width.unwrap_or_else(default_width));

    if let Some(title) = &options.title {
        panel = panel.title(gradient(title, options.title_stops, Justify::Center)?);
    }
    if let Some(subtitle) = &options.subtitle {
        panel = panel.subtitle(gradient(subtitle, options.title_stops, Justify::Right)?);
    }
    Ok(panel)
}

/// Split cells into rows of at most `max` columns, breaking on newlines.
fn wrap(cells: impl Iterator<Item = Cell>, max: usize) -> Vec<Vec<Cell>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut width = 0;

    for (c, rgb) in cells {
        match c {
            '\n' => {
                lines.push(std::mem::take(&mut current));
                width = 0;
                continue;
            }
            '\r' => continue,
            _ => {}
        }
        let c = if c == '\t' { ' ' } else { c };
        let w = cell_width(c);
        if width + w > max && width > 0 {
            lines.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push((c, rgb));
        width += w;
    }
    lines.push(current);
    lines
}

/// Keep leading cells that fit into `max` columns.
fn truncate(cells: impl Iterator<Item = Cell>, max: usize) -> Vec<Cell> {
    let mut width = 0;
    cells
        .take_while(|(c, _)| {
            width += cell_width(*c);
            width <= max
        })
        .collect()
}
