//! Color inspection handlers

use anyhow::{bail, Result};

use maxsetup::color::{ansi_name, ColorSpec, Rgb, ANSI_COLORS};
use maxsetup::theme::{current_theme, Theme};

const SWATCH: &str = "██████";

/// Classify `input` and print its conversions.
#[cfg(not(tarpaulin_include))]
pub fn handle_color(input: &str) -> Result<()> {
    let spec = ColorSpec::parse(input)?;
    let theme = current_theme();

    print_field(&theme, "kind", spec.kind());
    print_field(&theme, "input", &spec.to_string());
    if let Some(rgb) = spec.to_rgb() {
        print_field(&theme, "hex", &rgb.to_hex());
        print_field(&theme, "rgb", &rgb.to_string());
        print_field(&theme, "swatch", &theme.rgb_text(rgb, SWATCH));
    }
    if let Some(n) = spec.to_ansi() {
        let exact = matches!(spec, ColorSpec::Ansi(_) | ColorSpec::W3(_));
        let name = ansi_name(n).unwrap_or("-");
        let label = if exact { "ansi" } else { "nearest" };
        print_field(&theme, label, &format!("{n} ({name})"));
    }
    Ok(())
}

/// List the ANSI color table, optionally filtered by name.
#[cfg(not(tarpaulin_include))]
pub fn handle_colors(filter: Option<&str>) -> Result<()> {
    let theme = current_theme();
    let needle = filter.map(str::to_lowercase);
    let rows = ANSI_COLORS
        .iter()
        .filter(|(_, name)| needle.as_deref().map_or(true, |n| name.contains(n)))
        .collect::<Vec<_>>();

    if rows.is_empty() {
        bail!("No colors match '{}'", filter.unwrap_or_default());
    }
    for (number, name) in rows {
        println!(
            "{:>3}  {}  {}",
            number,
            theme.rgb_text(Rgb::from_ansi(*number), "██"),
            theme.primary_text(name)
        );
    }
    Ok(())
}

fn print_field(theme: &Theme, label: &str, value: &str) {
    println!(
        "{} {}",
        theme.accent_text(&format!("{:<8}", format!("{label}:"))),
        value
    );
}
