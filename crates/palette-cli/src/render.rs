//! # Terminal Rendering
//!
//! Palette cards for the terminal: title, tag badges, and one truecolor
//! block per swatch drawn in its resolved text color.

use colored::{Color, ColoredString, Colorize};

use palette_core::{resolve_text_color, BadgeColor, Palette, Rgb};

/// One swatch as it will be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch<'a> {
    /// Swatch background, as stored.
    pub background: &'a str,
    /// Text color drawn over it.
    pub text: &'a str,
}

/// Resolve every swatch of a palette, in color order.
pub fn swatches(palette: &Palette) -> Vec<Swatch<'_>> {
    palette
        .colors
        .iter()
        .map(|color| Swatch {
            background: color,
            text: resolve_text_color(color, &palette.text_pairs),
        })
        .collect()
}

/// A swatch block labelled with its hex value. Colors that do not parse
/// are left unstyled.
pub fn paint_swatch(swatch: &Swatch<'_>) -> ColoredString {
    let label = format!(" {} ", swatch.background);
    let mut block = label.as_str().normal();
    if let Ok(bg) = Rgb::from_hex(swatch.background) {
        block = block.on_truecolor(bg.r, bg.g, bg.b);
    }
    if let Ok(fg) = Rgb::from_hex(swatch.text) {
        block = block.truecolor(fg.r, fg.g, fg.b);
    }
    block
}

/// Background and foreground for a tag badge.
pub fn badge_colors(badge: BadgeColor) -> (Color, Color) {
    match badge {
        BadgeColor::Gray => (Color::BrightBlack, Color::White),
        BadgeColor::Red => (Color::Red, Color::White),
        BadgeColor::Yellow => (Color::Yellow, Color::Black),
        BadgeColor::Blue => (Color::Blue, Color::White),
    }
}

/// A tag badge, colored by the tag vocabulary.
pub fn paint_badge(tag: &str) -> ColoredString {
    let (bg, fg) = badge_colors(BadgeColor::for_tag(tag));
    let label = format!(" {tag} ");
    label.as_str().on_color(bg).color(fg)
}

/// Multi-line card for one palette.
pub fn card(palette: &Palette) -> String {
    let id = format!("[{}]", palette.id);
    let mut lines = vec![format!(
        "{}  {}",
        palette.display_title().bold(),
        id.as_str().dimmed()
    )];

    if !palette.tags.is_empty() {
        let badges: Vec<String> = palette
            .tags
            .iter()
            .map(|tag| paint_badge(tag).to_string())
            .collect();
        lines.push(format!("  {}", badges.join(" ")));
    }

    if !palette.colors.is_empty() {
        let blocks: Vec<String> = swatches(palette)
            .iter()
            .map(|swatch| paint_swatch(swatch).to_string())
            .collect();
        lines.push(format!("  {}", blocks.join("")));
    }

    if !palette.notes.is_empty() {
        lines.push(format!("  {}", palette.notes.as_str().italic()));
    }

    lines.join("\n")
}

/// Card plus the explicit background/text overrides.
pub fn detail(palette: &Palette) -> String {
    let mut out = card(palette);
    if !palette.text_pairs.is_empty() {
        out.push_str("\n  text pairs:");
        for pair in &palette.text_pairs {
            let swatch = Swatch {
                background: &pair.background,
                text: &pair.text,
            };
            out.push_str(&format!(
                "\n    {} {} on {}",
                paint_swatch(&swatch),
                pair.text,
                pair.background
            ));
        }
    }
    out
}
