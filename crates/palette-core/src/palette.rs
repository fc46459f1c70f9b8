//! # Palette Records
//!
//! The single entity of the catalog, plus its id newtype and the
//! id-less draft used as the body of create and update requests.
//!
//! Wire names are camelCase (`textPairs`) to match stored documents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display title used wherever a palette has an empty title.
pub const UNTITLED: &str = "Untitled Palette";

/// Opaque identifier assigned by the store when a palette is created.
///
/// The catalog never inspects its contents; it only compares ids for
/// equality when reconciling the local list with server responses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteId(String);

impl PaletteId {
    /// Wrap a store-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaletteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PaletteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Explicit text color for one swatch background.
///
/// When a swatch's color equals `background` (ignoring ASCII case), the
/// swatch text is drawn in `text` instead of the computed contrast color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    /// Swatch background this override applies to.
    pub background: String,
    /// Text color to draw on that background.
    pub text: String,
}

impl TextPair {
    /// Build a pair from a background and a text color.
    pub fn new(background: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            text: text.into(),
        }
    }
}

/// A persisted color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Store-assigned identifier.
    pub id: PaletteId,
    /// Display title. May be empty for legacy documents.
    pub title: String,
    /// Free-text notes.
    pub notes: String,
    /// Tag strings, loosely drawn from Minimal/Bold/Playful.
    pub tags: Vec<String>,
    /// Swatch colors in display order.
    pub colors: Vec<String>,
    /// Background/text overrides.
    pub text_pairs: Vec<TextPair>,
}

impl Palette {
    /// Title for display, substituting [`UNTITLED`] for an empty title.
    pub fn display_title(&self) -> &str {
        display_title(&self.title)
    }

    /// Copy the editable fields into a draft.
    pub fn to_draft(&self) -> PaletteDraft {
        PaletteDraft {
            title: self.title.clone(),
            notes: self.notes.clone(),
            tags: self.tags.clone(),
            colors: self.colors.clone(),
            text_pairs: self.text_pairs.clone(),
        }
    }
}

/// The editable fields of a palette: everything except `id`.
///
/// This is the body of `POST /api/palettes` and `PUT /api/palettes/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteDraft {
    /// Display title.
    pub title: String,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Tag strings.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Swatch colors in display order.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Background/text overrides.
    #[serde(default)]
    pub text_pairs: Vec<TextPair>,
}

impl PaletteDraft {
    /// Attach a store-assigned id, producing a full record.
    pub fn with_id(self, id: PaletteId) -> Palette {
        Palette {
            id,
            title: self.title,
            notes: self.notes,
            tags: self.tags,
            colors: self.colors,
            text_pairs: self.text_pairs,
        }
    }

    /// Title for display, substituting [`UNTITLED`] for an empty title.
    pub fn display_title(&self) -> &str {
        display_title(&self.title)
    }
}

fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        UNTITLED
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette {
            id: PaletteId::new("p1"),
            title: "Sunset".to_string(),
            notes: String::new(),
            tags: vec!["Bold".to_string()],
            colors: vec!["#ff7700".to_string()],
            text_pairs: vec![TextPair::new("#ff7700", "#111111")],
        }
    }

    #[test]
    fn serializes_with_camel_case_text_pairs() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["textPairs"][0]["background"], "#ff7700");
        assert!(json.get("text_pairs").is_none());
    }

    #[test]
    fn draft_round_trips_through_with_id() {
        let palette = sample();
        let rebuilt = palette.to_draft().with_id(palette.id.clone());
        assert_eq!(rebuilt, palette);
    }

    #[test]
    fn draft_deserializes_with_only_title() {
        let draft: PaletteDraft = serde_json::from_str(r#"{"title":"Only"}"#).unwrap();
        assert_eq!(draft.title, "Only");
        assert!(draft.tags.is_empty());
        assert!(draft.text_pairs.is_empty());
    }

    #[test]
    fn empty_title_displays_placeholder() {
        let mut palette = sample();
        palette.title = "   ".to_string();
        assert_eq!(palette.display_title(), UNTITLED);
        assert_eq!(sample().display_title(), "Sunset");
    }

    #[test]
    fn palette_id_display_is_raw_string() {
        assert_eq!(PaletteId::from("abc").to_string(), "abc");
    }
}
