//! # Palette Edit Buffer
//!
//! [`PaletteForm`] holds one in-progress palette while it is being created
//! or edited. It never talks to the store: [`PaletteForm::submit`] hands the
//! finished [`PaletteDraft`] to a caller-supplied callback, which decides
//! whether to POST or PUT it.
//!
//! Tag checkboxes are backed by a [`TagSet`]. On submit the set is written
//! out in canonical order (`Minimal`, `Bold`, `Playful`), so tags outside the
//! vocabulary on the source palette are not carried through an edit.

use crate::error::FormError;
use crate::palette::{Palette, PaletteDraft, PaletteId, TextPair, UNTITLED};
use crate::tag::{Tag, TagSet};

/// Whether the form creates a new palette or edits an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    /// No id yet; submit should POST.
    #[default]
    Create,
    /// Editing the palette with this id; submit should PUT.
    Edit(PaletteId),
}

/// Which half of a text pair to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPairField {
    /// The swatch background.
    Background,
    /// The text color drawn over it.
    Text,
}

/// Edit buffer for a single palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteForm {
    mode: FormMode,
    title: String,
    notes: String,
    tags: TagSet,
    colors: Vec<String>,
    text_pairs: Vec<TextPair>,
}

impl PaletteForm {
    /// Blank buffer in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer seeded from `source`, or blank when `source` is `None`.
    pub fn from_palette(source: Option<&Palette>) -> Self {
        let mut form = Self::new();
        form.reset(source);
        form
    }

    /// Replace the whole buffer from a new source.
    ///
    /// Incoming tags are lower-cased before the toggles are derived, so
    /// `"BOLD"` and `"bold"` both check the Bold box.
    pub fn reset(&mut self, source: Option<&Palette>) {
        *self = match source {
            None => Self::default(),
            Some(palette) => Self {
                mode: FormMode::Edit(palette.id.clone()),
                title: palette.title.clone(),
                notes: palette.notes.clone(),
                tags: TagSet::from_tags(palette.tags.iter().map(|t| t.to_lowercase())),
                colors: palette.colors.clone(),
                text_pairs: palette.text_pairs.clone(),
            },
        };
    }

    /// Create or edit.
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Current tag toggles.
    pub fn tags(&self) -> TagSet {
        self.tags
    }

    /// Current colors.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Current text pairs.
    pub fn text_pairs(&self) -> &[TextPair] {
        &self.text_pairs
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Flip one tag checkbox, returning its new state.
    pub fn toggle_tag(&mut self, tag: Tag) -> bool {
        self.tags.toggle(tag)
    }

    /// Check or uncheck one tag checkbox.
    pub fn set_tag(&mut self, tag: Tag, on: bool) {
        self.tags.set(tag, on);
    }

    /// Append an empty color entry.
    pub fn add_color(&mut self) {
        self.colors.push(String::new());
    }

    /// Overwrite the color at `index`.
    pub fn set_color(&mut self, index: usize, color: impl Into<String>) -> Result<(), FormError> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(FormError::ColorIndex { index, len })?;
        *slot = color.into();
        Ok(())
    }

    /// Append an empty background/text pair.
    pub fn add_text_pair(&mut self) {
        self.text_pairs.push(TextPair::default());
    }

    /// Overwrite one field of the text pair at `index`.
    pub fn set_text_pair(
        &mut self,
        index: usize,
        field: TextPairField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let len = self.text_pairs.len();
        let pair = self
            .text_pairs
            .get_mut(index)
            .ok_or(FormError::TextPairIndex { index, len })?;
        match field {
            TextPairField::Background => pair.background = value.into(),
            TextPairField::Text => pair.text = value.into(),
        }
        Ok(())
    }

    /// The buffer as a draft, exactly as it would be submitted.
    pub fn draft(&self) -> PaletteDraft {
        PaletteDraft {
            title: self.title.clone(),
            notes: self.notes.clone(),
            tags: self.tags.to_tags(),
            colors: self.colors.clone(),
            text_pairs: self.text_pairs.clone(),
        }
    }

    /// Draft for live preview: an empty title shows as [`UNTITLED`].
    pub fn preview(&self) -> PaletteDraft {
        let mut draft = self.draft();
        if draft.title.trim().is_empty() {
            draft.title = UNTITLED.to_string();
        }
        draft
    }

    /// Finalize the buffer and pass it to `on_submit`.
    pub fn submit<R>(&self, on_submit: impl FnOnce(PaletteDraft) -> R) -> R {
        on_submit(self.draft())
    }
}
