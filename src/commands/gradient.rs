//! Gradient, rainbow and panel command handlers

use anyhow::{Context, Result};

use maxsetup::gradient::{
    default_width, gradient_panel, Gradient, Justify, PanelOptions, RemainderPolicy, StyledText,
};
use maxsetup::theme::color_enabled;
use maxsetup::Config;

/// Print `message` with a random gradient.
#[cfg(not(tarpaulin_include))]
pub fn handle_gradient(
    config: &Config,
    message: &str,
    stops: Option<usize>,
    justify: Option<Justify>,
    width: Option<usize>,
    start: Option<usize>,
    truncate: bool,
) -> Result<()> {
    let stops = stops.unwrap_or(config.gradient.default_stops);
    let remainder = if truncate {
        RemainderPolicy::Truncate
    } else {
        config.gradient.remainder
    };

    let mut gradient = Gradient::new(stops)
        .context("Cannot build gradient")?
        .justify(justify.unwrap_or(config.gradient.justify))
        .remainder(remainder);
    if let Some(start) = start {
        gradient = gradient.start_at(start);
    }

    print_styled(&gradient.apply(message), width);
    Ok(())
}

/// Print `message` across the whole palette.
#[cfg(not(tarpaulin_include))]
pub fn handle_rainbow(message: &str) -> Result<()> {
    print_styled(&maxsetup::gradient::rainbow(message), None);
    Ok(())
}

/// Print `message` inside a panel.
#[cfg(not(tarpaulin_include))]
pub fn handle_panel(
    config: &Config,
    message: &str,
    title: Option<String>,
    subtitle: Option<String>,
    stops: Option<usize>,
    width: Option<usize>,
    justify: Option<Justify>,
) -> Result<()> {
    let options = PanelOptions {
        title,
        subtitle,
        width: width.or(config.panel.width),
        justify: justify.unwrap_or(config.gradient.justify),
        title_stops: config.panel.title_stops,
        border: config.panel.border_rgb()?,
    };
    let stops = stops.unwrap_or(config.gradient.default_stops);
    let panel = gradient_panel(message, stops, &options).context("Cannot build panel")?;
    println!("{}", panel.render(color_enabled()));
    Ok(())
}

/// Left-justified text is printed as-is; other justifications pad into
/// `width` (the terminal width when unset).
fn print_styled(text: &StyledText, width: Option<usize>) {
    let colored = color_enabled();
    let line = match (text.justify(), width) {
        (Justify::Left, None) => text.render(colored),
        (_, width) => text.render_aligned(width.unwrap_or_else(default_width), colored),
    };
    println!("{line}");
}
