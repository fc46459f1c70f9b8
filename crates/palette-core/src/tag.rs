//! # Tag Vocabulary
//!
//! The catalog recognizes three tags: Minimal, Bold, Playful. Stored
//! palettes may carry any strings as tags; only these three take part in
//! filtering and in the edit form's toggles.
//!
//! [`TagSet`] is the one representation of "which of the three are on".
//! The per-tag boolean accessors are derived from it, so the flags and
//! the tag list can never disagree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three canonical tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tag {
    /// Restrained palettes.
    Minimal,
    /// High-saturation palettes.
    Bold,
    /// Bright, fun palettes.
    Playful,
}

impl Tag {
    /// All canonical tags, in display order.
    pub const ALL: [Tag; 3] = [Tag::Minimal, Tag::Bold, Tag::Playful];

    /// Canonical stored spelling (`"Minimal"`, `"Bold"`, `"Playful"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Bold => "Bold",
            Self::Playful => "Playful",
        }
    }

    /// Lower-case key used for case-insensitive matching.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Bold => "bold",
            Self::Playful => "playful",
        }
    }

    /// Parse a tag string, ignoring ASCII case. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.key().eq_ignore_ascii_case(s))
    }

    fn bit(self) -> u8 {
        match self {
            Self::Minimal => 0b001,
            Self::Bold => 0b010,
            Self::Playful => 0b100,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge color for a tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    /// Minimal.
    Gray,
    /// Bold.
    Red,
    /// Playful.
    Yellow,
    /// Any tag outside the vocabulary.
    Blue,
}

impl BadgeColor {
    /// Badge color for any tag string, case-insensitive.
    pub fn for_tag(tag: &str) -> Self {
        match Tag::parse(tag) {
            Some(Tag::Minimal) => Self::Gray,
            Some(Tag::Bold) => Self::Red,
            Some(Tag::Playful) => Self::Yellow,
            None => Self::Blue,
        }
    }

    /// Lower-case color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        }
    }
}

/// A subset of the canonical tags.
///
/// Used both for filter toggles (which tags the user wants to see) and for
/// the edit form (which tags a palette carries).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u8);

impl TagSet {
    /// No tags.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All three tags.
    pub const fn all() -> Self {
        Self(0b111)
    }

    /// Derive the set from arbitrary tag strings. Matching ignores case;
    /// strings outside the vocabulary are ignored.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .filter_map(|s| Tag::parse(s.as_ref()))
            .fold(Self::empty(), |mut set, tag| {
                set.insert(tag);
                set
            })
    }

    /// Whether `tag` is in the set.
    pub fn contains(&self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Add `tag`.
    pub fn insert(&mut self, tag: Tag) {
        self.0 |= tag.bit();
    }

    /// Remove `tag`.
    pub fn remove(&mut self, tag: Tag) {
        self.0 &= !tag.bit();
    }

    /// Set membership of `tag` explicitly.
    pub fn set(&mut self, tag: Tag, on: bool) {
        if on {
            self.insert(tag);
        } else {
            self.remove(tag);
        }
    }

    /// Flip membership of `tag`, returning the new state.
    pub fn toggle(&mut self, tag: Tag) -> bool {
        self.0 ^= tag.bit();
        self.contains(tag)
    }

    /// Whether no tag is in the set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }

    /// Canonical tag strings in canonical order, as stored on a palette.
    pub fn to_tags(&self) -> Vec<String> {
        self.iter().map(|tag| tag.as_str().to_string()).collect()
    }

    /// Minimal flag.
    pub fn minimal(&self) -> bool {
        self.contains(Tag::Minimal)
    }

    /// Bold flag.
    pub fn bold(&self) -> bool {
        self.contains(Tag::Bold)
    }

    /// Playful flag.
    pub fn playful(&self) -> bool {
        self.contains(Tag::Playful)
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |mut set, tag| {
            set.insert(tag);
            set
        })
    }
}
