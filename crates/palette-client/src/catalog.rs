//! # Catalog State
//!
//! [`PaletteCatalog`] is the single owner of everything a palette browser
//! shows: the loaded palettes, the tag filter toggles, the editor (if
//! open) and the palette awaiting delete confirmation.
//!
//! Each mutating operation awaits one round trip through [`PaletteClient`]
//! and then reconciles the local list with the server's answer. Failures
//! leave the list untouched; they are logged and kept in
//! [`PaletteCatalog::last_error`] until the next successful call.

use palette_core::{
    filter_palettes, FormMode, Palette, PaletteDraft, PaletteForm, PaletteId, Tag, TagSet,
};

use crate::{ClientError, PaletteClient};

/// Browsing and editing state for the palette catalog.
#[derive(Debug)]
pub struct PaletteCatalog {
    client: PaletteClient,
    palettes: Vec<Palette>,
    filters: TagSet,
    editor: Option<PaletteForm>,
    pending_delete: Option<PaletteId>,
    last_error: Option<String>,
}

impl PaletteCatalog {
    /// Empty catalog with every filter toggle on.
    pub fn new(client: PaletteClient) -> Self {
        Self {
            client,
            palettes: Vec::new(),
            filters: TagSet::all(),
            editor: None,
            pending_delete: None,
            last_error: None,
        }
    }

    /// The underlying client.
    pub fn client(&self) -> &PaletteClient {
        &self.client
    }

    /// All loaded palettes, in load order.
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// A loaded palette by id.
    pub fn find(&self, id: &PaletteId) -> Option<&Palette> {
        self.palettes.iter().find(|p| &p.id == id)
    }

    /// Message of the most recent failed operation, if it has not been
    /// superseded by a success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Reload the list from the service.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let result = self.client.list().await;
        let palettes = self.record(result, "failed to load palettes")?;
        self.palettes = palettes;
        Ok(())
    }

    // -- Filter ---------------------------------------------------------------

    /// Current filter toggles.
    pub fn filters(&self) -> TagSet {
        self.filters
    }

    /// Flip one filter toggle, returning its new state.
    pub fn toggle_filter(&mut self, tag: Tag) -> bool {
        self.filters.toggle(tag)
    }

    /// Replace all filter toggles.
    pub fn set_filters(&mut self, filters: TagSet) {
        self.filters = filters;
    }

    /// Palettes passing the current filter, in list order.
    pub fn visible(&self) -> Vec<&Palette> {
        filter_palettes(&self.palettes, &self.filters)
    }

    // -- Editor ---------------------------------------------------------------

    /// Open a blank editor for a new palette.
    pub fn open_new(&mut self) -> &mut PaletteForm {
        self.editor.insert(PaletteForm::new())
    }

    /// Open the editor on a loaded palette. Returns `None` if `id` is not
    /// in the list.
    pub fn open_edit(&mut self, id: &PaletteId) -> Option<&mut PaletteForm> {
        let form = PaletteForm::from_palette(Some(self.find(id)?));
        Some(self.editor.insert(form))
    }

    /// The open editor, if any.
    pub fn editor(&self) -> Option<&PaletteForm> {
        self.editor.as_ref()
    }

    /// The open editor, if any, for modification.
    pub fn editor_mut(&mut self) -> Option<&mut PaletteForm> {
        self.editor.as_mut()
    }

    /// Discard the open editor.
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Submit the open editor and close it, whether or not the save
    /// succeeds. Returns `Ok(None)` when no editor is open.
    pub async fn submit_editor(&mut self) -> Result<Option<Palette>, ClientError> {
        let Some(form) = self.editor.take() else {
            return Ok(None);
        };
        let mode = form.mode().clone();
        let draft = form.submit(|draft| draft);
        self.save(mode, draft).await.map(Some)
    }

    /// Persist a draft: create it, or update the palette it was edited
    /// from. A created palette is appended to the list; an updated one
    /// replaces the entry with the same id.
    pub async fn save(
        &mut self,
        mode: FormMode,
        draft: PaletteDraft,
    ) -> Result<Palette, ClientError> {
        match mode {
            FormMode::Create => {
                let result = self.client.create(&draft).await;
                let created = self.record(result, "failed to create palette")?;
                self.palettes.push(created.clone());
                Ok(created)
            }
            FormMode::Edit(id) => {
                let result = self.client.update(&id, &draft).await;
                let updated = self.record(result, "failed to update palette")?;
                if let Some(slot) = self.palettes.iter_mut().find(|p| p.id == updated.id) {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
        }
    }

    // -- Delete ---------------------------------------------------------------

    /// Mark a palette for deletion, pending confirmation.
    pub fn request_delete(&mut self, id: PaletteId) {
        self.pending_delete = Some(id);
    }

    /// The palette awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<&PaletteId> {
        self.pending_delete.as_ref()
    }

    /// Drop the pending delete without contacting the service.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending palette. The pending mark is cleared either way;
    /// the palette leaves the list only if the service confirms. Returns
    /// the deleted id, or `Ok(None)` when nothing was pending.
    pub async fn confirm_delete(&mut self) -> Result<Option<PaletteId>, ClientError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };
        let result = self.client.remove(&id).await;
        self.record(result, "failed to delete palette")?;
        self.palettes.retain(|p| p.id != id);
        Ok(Some(id))
    }

    /// Log and remember a failure, or clear the remembered one on success.
    fn record<T>(&mut self, result: Result<T, ClientError>, what: &str) -> Result<T, ClientError> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Ok(value)
            }
            Err(err) => {
                tracing::error!(error = %err, "{what}");
                self.last_error = Some(format!("{what}: {err}"));
                Err(err)
            }
        }
    }
}
