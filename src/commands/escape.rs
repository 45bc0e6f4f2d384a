//! Escape handlers

use std::path::Path;

use anyhow::{Context, Result};

use maxsetup::escape::{compress_tree, escape_file};
use maxsetup::gradient::{default_width, Panel, StyledText, DEFAULT_BORDER};
use maxsetup::theme::{color_enabled, current_theme};
use maxsetup::Config;

/// Below this width the two panels are stacked instead of placed side by side.
const SIDE_BY_SIDE_MIN_WIDTH: usize = 60;

/// Show a file next to its escaped form.
#[cfg(not(tarpaulin_include))]
pub fn handle_escape_file(config: &Config, file: &Path) -> Result<()> {
    let escaped = escape_file(file)?;
    let border = config.panel.border_rgb().unwrap_or(DEFAULT_BORDER);
    let width = config.panel.width.unwrap_or_else(default_width);
    let colored = color_enabled();

    let title = StyledText::plain(&file.display().to_string());
    let original = Panel::new(StyledText::plain(&escaped.content))
        .title(title)
        .border(border);
    let result = Panel::new(StyledText::plain(&escaped.escaped_content))
        .title(StyledText::plain("escaped"))
        .border(border);

    if width >= SIDE_BY_SIDE_MIN_WIDTH {
        let half = width / 2;
        println!(
            "{}",
            Panel::side_by_side(&original.width(half), &result.width(width - half), colored)
        );
    } else {
        println!("{}", original.width(width).render(colored));
        println!("{}", result.width(width).render(colored));
    }
    Ok(())
}

/// Escape every file under `root` into the configured output directory.
#[cfg(not(tarpaulin_include))]
pub fn handle_escape_all(config: &Config, root: &Path) -> Result<()> {
    let theme = current_theme();
    let escaped = compress_tree(root, &config.escape)
        .with_context(|| format!("Failed to escape files under {}", root.display()))?;

    let output_dir = root.join(&config.escape.output_dir);
    for key in escaped.keys() {
        println!("{} {}", theme.success_text("escaped"), key);
    }
    println!(
        "{}",
        theme.primary_text(&format!(
            "{} file(s) written to {}",
            escaped.len(),
            output_dir.display()
        ))
    );
    Ok(())
}
