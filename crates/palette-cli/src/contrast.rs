//! # Contrast Subcommand
//!
//! Resolves the text color for a background without touching the service.

use anyhow::Result;
use clap::Args;

use palette_core::{luminance, resolve_text_color, TextPair};

use crate::render::{self, Swatch};

/// Arguments for `palette contrast`.
#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// Background color, `#rrggbb`.
    pub color: String,
    /// Text color override as `BACKGROUND:TEXT` (repeatable).
    #[arg(long = "pair", value_name = "BG:TEXT", value_parser = crate::palettes::parse_pair)]
    pub pairs: Vec<TextPair>,
}

/// Print the resolved text color, with a sample swatch.
pub fn run_contrast(args: &ContrastArgs) -> Result<u8> {
    let text = resolve_text_color(&args.color, &args.pairs);
    let swatch = Swatch {
        background: &args.color,
        text,
    };
    match luminance(&args.color) {
        Ok(l) => println!("{text}  luminance={l:.3}  {}", render::paint_swatch(&swatch)),
        Err(e) => {
            tracing::warn!("{e}");
            println!("{text}  {}", render::paint_swatch(&swatch));
        }
    }
    Ok(0)
}
