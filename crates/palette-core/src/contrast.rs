//! # Contrast Resolution
//!
//! Chooses the text color drawn over a swatch. An explicit [`TextPair`]
//! for the swatch background always wins; otherwise the text is black on
//! light backgrounds and white on dark ones.
//!
//! Luminance here is the channel-weighted sum of the *unlinearized* sRGB
//! channels (0.2126 R + 0.7152 G + 0.0722 B, each in `[0, 1]`), compared
//! against a fixed threshold of 0.6.
//!
//! ## Unparseable colors
//!
//! A background that is not `#rrggbb` cannot be measured. [`contrast_text`]
//! resolves it to [`WHITE`]; callers that would rather reject the color use
//! [`Rgb::from_hex`] or [`luminance`] directly.

use std::str::FromStr;

use crate::error::ColorError;
use crate::palette::TextPair;

/// Text color for light backgrounds.
pub const BLACK: &str = "#000000";

/// Text color for dark or unparseable backgrounds.
pub const WHITE: &str = "#FFFFFF";

/// Backgrounds strictly brighter than this get black text.
pub const LUMINANCE_THRESHOLD: f64 = 0.6;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(ColorError::InvalidLength(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidDigit(s.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Weighted luminance in `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        0.2126 * (f64::from(self.r) / 255.0)
            + 0.7152 * (f64::from(self.g) / 255.0)
            + 0.0722 * (f64::from(self.b) / 255.0)
    }

    /// Upper-case `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Luminance of a `#rrggbb` color string.
pub fn luminance(color: &str) -> Result<f64, ColorError> {
    Rgb::from_hex(color).map(|rgb| rgb.luminance())
}

/// Computed text color for a background, ignoring overrides.
pub fn contrast_text(background: &str) -> &'static str {
    match luminance(background) {
        Ok(l) if l > LUMINANCE_THRESHOLD => BLACK,
        _ => WHITE,
    }
}

/// Text color for a swatch: the first override whose background matches
/// (ASCII case-insensitive), else [`contrast_text`].
pub fn resolve_text_color<'a>(background: &str, overrides: &'a [TextPair]) -> &'a str {
    overrides
        .iter()
        .find(|pair| pair.background.eq_ignore_ascii_case(background))
        .map(|pair| pair.text.as_str())
        .unwrap_or_else(|| contrast_text(background))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_background_gets_black_text() {
        assert!((luminance("#FFFFFF").unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(resolve_text_color("#FFFFFF", &[]), BLACK);
    }

    #[test]
    fn black_background_gets_white_text() {
        assert_eq!(luminance("#000000").unwrap(), 0.0);
        assert_eq!(resolve_text_color("#000000", &[]), WHITE);
    }

    #[test]
    fn mid_gray_is_below_threshold() {
        let l = luminance("#808080").unwrap();
        assert!((l - 0.502).abs() < 0.001, "got {l}");
        assert_eq!(resolve_text_color("#808080", &[]), WHITE);
    }

    #[test]
    fn hash_prefix_is_optional() {
        assert_eq!(Rgb::from_hex("ffcc00").unwrap(), Rgb::from_hex("#FFCC00").unwrap());
    }

    #[test]
    fn override_matches_case_insensitively() {
        let pairs = vec![TextPair::new("#ABCDEF", "#123456")];
        assert_eq!(resolve_text_color("#abcdef", &pairs), "#123456");
    }

    #[test]
    fn first_matching_override_wins() {
        let pairs = vec![
            TextPair::new("#ffffff", "#ff0000"),
            TextPair::new("#FFFFFF", "#00ff00"),
        ];
        assert_eq!(resolve_text_color("#FFFFFF", &pairs), "#ff0000");
    }

    #[test]
    fn override_applies_to_unparseable_background() {
        let pairs = vec![TextPair::new("tomato", "#000000")];
        assert_eq!(resolve_text_color("TOMATO", &pairs), "#000000");
    }

    #[test]
    fn malformed_colors_fall_back_to_white() {
        for bad in ["", "#", "#fff", "#ffffff0", "#gggggg", "white", "#ff ff f"] {
            assert_eq!(contrast_text(bad), WHITE, "input {bad:?}");
        }
    }

    #[test]
    fn malformed_colors_are_rejected_by_parser() {
        assert!(matches!(
            Rgb::from_hex("#fff"),
            Err(ColorError::InvalidLength(_))
        ));
        assert!(matches!(
            Rgb::from_hex("#zzzzzz"),
            Err(ColorError::InvalidDigit(_))
        ));
        assert!(luminance("#12345").is_err());
    }

    #[test]
    fn to_hex_is_upper_case() {
        assert_eq!(Rgb::from_hex("#a0b1c2").unwrap().to_hex(), "#A0B1C2");
    }
}
