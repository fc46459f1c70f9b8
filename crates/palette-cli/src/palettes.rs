//! # Palette Subcommands
//!
//! `list`, `show`, `create`, `update` and `delete`. Every write goes
//! through the catalog's editor so the submitted draft is exactly what the
//! edit form would produce: tags in canonical order, colors and text pairs
//! edited by position.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Args;

use palette_client::PaletteCatalog;
use palette_core::{PaletteForm, PaletteId, Tag, TagSet, TextPair, TextPairField};

use crate::render;

/// Arguments for `palette list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show only palettes carrying any of these tags (repeatable).
    /// Without any, every palette is shown.
    #[arg(long = "tag", value_name = "TAG", value_parser = parse_tag)]
    pub tags: Vec<Tag>,
}

/// Arguments for `palette show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Palette id.
    pub id: String,
}

/// Arguments for `palette create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Palette title.
    #[arg(long)]
    pub title: String,
    /// Free-text notes.
    #[arg(long)]
    pub notes: Option<String>,
    /// Tag to set (repeatable): minimal, bold or playful.
    #[arg(long = "tag", value_name = "TAG", value_parser = parse_tag)]
    pub tags: Vec<Tag>,
    /// Swatch color, in order (repeatable).
    #[arg(long = "color", value_name = "HEX")]
    pub colors: Vec<String>,
    /// Text color override as `BACKGROUND:TEXT` (repeatable).
    #[arg(long = "pair", value_name = "BG:TEXT", value_parser = parse_pair)]
    pub pairs: Vec<TextPair>,
}

/// Arguments for `palette update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Palette id.
    pub id: String,
    /// New title.
    #[arg(long)]
    pub title: Option<String>,
    /// New notes.
    #[arg(long)]
    pub notes: Option<String>,
    /// Tag to set (repeatable).
    #[arg(long = "tag", value_name = "TAG", value_parser = parse_tag)]
    pub tags: Vec<Tag>,
    /// Tag to clear (repeatable).
    #[arg(long = "untag", value_name = "TAG", value_parser = parse_tag)]
    pub untags: Vec<Tag>,
    /// Replace the color at a position, as `INDEX=HEX` (repeatable).
    #[arg(long = "set-color", value_name = "INDEX=HEX", value_parser = parse_indexed_color)]
    pub set_colors: Vec<(usize, String)>,
    /// Append a color (repeatable).
    #[arg(long = "add-color", value_name = "HEX")]
    pub add_colors: Vec<String>,
    /// Replace the text pair at a position, as `INDEX=BG:TEXT` (repeatable).
    #[arg(long = "set-pair", value_name = "INDEX=BG:TEXT", value_parser = parse_indexed_pair)]
    pub set_pairs: Vec<(usize, TextPair)>,
    /// Append a text pair as `BG:TEXT` (repeatable).
    #[arg(long = "add-pair", value_name = "BG:TEXT", value_parser = parse_pair)]
    pub add_pairs: Vec<TextPair>,
}

/// Arguments for `palette delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Palette id.
    pub id: String,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

// -- Argument parsers ---------------------------------------------------------

fn parse_tag(s: &str) -> Result<Tag, String> {
    Tag::parse(s).ok_or_else(|| format!("unknown tag '{s}' (expected minimal, bold or playful)"))
}

pub(crate) fn parse_pair(s: &str) -> Result<TextPair, String> {
    let (background, text) = s
        .split_once(':')
        .ok_or_else(|| format!("expected BACKGROUND:TEXT, got '{s}'"))?;
    Ok(TextPair::new(background, text))
}

fn split_index(s: &str) -> Result<(usize, &str), String> {
    let (index, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got '{s}'"))?;
    let index = index
        .parse()
        .map_err(|_| format!("invalid index '{index}'"))?;
    Ok((index, rest))
}

fn parse_indexed_color(s: &str) -> Result<(usize, String), String> {
    let (index, color) = split_index(s)?;
    Ok((index, color.to_string()))
}

fn parse_indexed_pair(s: &str) -> Result<(usize, TextPair), String> {
    let (index, pair) = split_index(s)?;
    Ok((index, parse_pair(pair)?))
}

// -- Form filling -------------------------------------------------------------

fn push_color(form: &mut PaletteForm, color: &str) -> Result<()> {
    form.add_color();
    let last = form.colors().len() - 1;
    form.set_color(last, color)?;
    Ok(())
}

fn push_pair(form: &mut PaletteForm, pair: &TextPair) -> Result<()> {
    form.add_text_pair();
    let last = form.text_pairs().len() - 1;
    set_pair(form, last, pair)
}

fn set_pair(form: &mut PaletteForm, index: usize, pair: &TextPair) -> Result<()> {
    form.set_text_pair(index, TextPairField::Background, pair.background.as_str())?;
    form.set_text_pair(index, TextPairField::Text, pair.text.as_str())?;
    Ok(())
}

/// Fill a blank form from `create` arguments.
pub fn fill_new(form: &mut PaletteForm, args: &CreateArgs) -> Result<()> {
    form.set_title(args.title.as_str());
    if let Some(notes) = &args.notes {
        form.set_notes(notes.as_str());
    }
    for tag in &args.tags {
        form.set_tag(*tag, true);
    }
    for color in &args.colors {
        push_color(form, color)?;
    }
    for pair in &args.pairs {
        push_pair(form, pair)?;
    }
    Ok(())
}

/// Apply `update` arguments to a form seeded from the stored palette.
pub fn apply_update(form: &mut PaletteForm, args: &UpdateArgs) -> Result<()> {
    if let Some(title) = &args.title {
        form.set_title(title.as_str());
    }
    if let Some(notes) = &args.notes {
        form.set_notes(notes.as_str());
    }
    for tag in &args.tags {
        form.set_tag(*tag, true);
    }
    for tag in &args.untags {
        form.set_tag(*tag, false);
    }
    for (index, color) in &args.set_colors {
        form.set_color(*index, color.as_str())?;
    }
    for color in &args.add_colors {
        push_color(form, color)?;
    }
    for (index, pair) in &args.set_pairs {
        set_pair(form, *index, pair)?;
    }
    for pair in &args.add_pairs {
        push_pair(form, pair)?;
    }
    Ok(())
}

/// Filter toggles for `list`: exactly the requested tags. With none
/// requested no toggle is active, so untagged palettes are listed too.
pub fn filters_for(args: &ListArgs) -> TagSet {
    args.tags.iter().copied().collect()
}

// -- Commands -----------------------------------------------------------------

/// List palettes, filtered by the given tags.
pub async fn run_list(catalog: &mut PaletteCatalog, args: &ListArgs) -> Result<u8> {
    catalog.refresh().await.context("failed to load palettes")?;
    catalog.set_filters(filters_for(args));

    let visible = catalog.visible();
    if visible.is_empty() {
        println!("No palettes.");
        return Ok(0);
    }
    for palette in visible {
        println!("{}\n", render::card(palette));
    }
    Ok(0)
}

/// Show one palette with its text pairs.
pub async fn run_show(catalog: &PaletteCatalog, args: &ShowArgs) -> Result<u8> {
    let id = PaletteId::new(args.id.as_str());
    match catalog.client().get(&id).await? {
        Some(palette) => {
            println!("{}", render::detail(&palette));
            Ok(0)
        }
        None => {
            println!("NOT FOUND: palette {id}");
            Ok(1)
        }
    }
}

/// Create a palette.
pub async fn run_create(catalog: &mut PaletteCatalog, args: &CreateArgs) -> Result<u8> {
    if args.title.trim().is_empty() {
        bail!("title must not be empty");
    }
    let form = catalog.open_new();
    fill_new(form, args)?;

    match catalog.submit_editor().await? {
        Some(palette) => {
            println!("OK: created palette {}", palette.id);
            println!("{}", render::card(&palette));
            Ok(0)
        }
        None => bail!("editor closed before submit"),
    }
}

/// Update a palette through the edit form.
pub async fn run_update(catalog: &mut PaletteCatalog, args: &UpdateArgs) -> Result<u8> {
    catalog.refresh().await.context("failed to load palettes")?;
    let id = PaletteId::new(args.id.as_str());
    let Some(form) = catalog.open_edit(&id) else {
        println!("NOT FOUND: palette {id}");
        return Ok(1);
    };
    if let Err(e) = apply_update(form, args) {
        catalog.close_editor();
        return Err(e);
    }

    match catalog.submit_editor().await? {
        Some(palette) => {
            println!("OK: updated palette {}", palette.id);
            println!("{}", render::card(&palette));
            Ok(0)
        }
        None => bail!("editor closed before submit"),
    }
}

/// Delete a palette, asking first unless `--yes` was given.
pub async fn run_delete(catalog: &mut PaletteCatalog, args: &DeleteArgs) -> Result<u8> {
    catalog.refresh().await.context("failed to load palettes")?;
    let id = PaletteId::new(args.id.as_str());
    let Some(title) = catalog.find(&id).map(|p| p.display_title().to_string()) else {
        println!("NOT FOUND: palette {id}");
        return Ok(1);
    };

    catalog.request_delete(id);
    if !args.yes && !confirm(&format!("Delete \"{title}\"?"))? {
        catalog.cancel_delete();
        println!("Cancelled.");
        return Ok(0);
    }

    if let Some(deleted) = catalog.confirm_delete().await? {
        println!("OK: deleted palette {deleted}");
    }
    Ok(0)
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
