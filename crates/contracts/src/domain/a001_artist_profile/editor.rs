//! Edit session of one artist profile.
//!
//! The canonical record is what the backend last returned (or accepted).
//! Editing works on a separate draft that is dropped on cancel. After a
//! successful save the server echo (or the draft) becomes canonical. A
//! failed save keeps both as they were. One editor per view; the last
//! successful save wins.
//!
//! File uploads are tracked per field. Each chosen file gets a ticket and
//! only the newest ticket of a field may complete it. The draft is frozen
//! while a save is running, and no save starts while an upload is pending.

use super::aggregate::{ArtistProfile, ArtistProfileUpdate};
use super::completion::{score_profile, CompletionScore};
use super::layout::{resolve_layout, FieldEdit, FormLayout};
use crate::shared::error::ProfileError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    NotFound(String),
}

/// User-visible outcome of the last save
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Saved,
    SaveFailed(String),
    UploadFailed(String),
}

/// Handle of one upload started by [`ProfileEditor::begin_upload`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    field_name: String,
    generation: u64,
}

impl UploadTicket {
    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileEditor {
    load: LoadState,
    canonical: Option<ArtistProfile>,
    draft: Option<ArtistProfile>,
    saving: bool,
    notice: Option<Notice>,
    /// Newest pending upload generation per field
    uploads: Vec<(String, u64)>,
    next_upload: u64,
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: ArtistProfile) -> Self {
        let mut editor = Self::new();
        editor.loaded(profile);
        editor
    }

    // === Loading ===

    pub fn loaded(&mut self, profile: ArtistProfile) {
        self.load = LoadState::Loaded;
        self.canonical = Some(profile);
        self.draft = None;
        self.saving = false;
        self.notice = None;
        self.uploads.clear();
    }

    /// No partial data survives a failed fetch
    pub fn load_failed(&mut self, error: impl Into<String>) {
        self.load = LoadState::NotFound(error.into());
        self.canonical = None;
        self.draft = None;
        self.saving = false;
        self.uploads.clear();
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    // === Accessors ===

    pub fn canonical(&self) -> Option<&ArtistProfile> {
        self.canonical.as_ref()
    }

    pub fn draft(&self) -> Option<&ArtistProfile> {
        self.draft.as_ref()
    }

    /// Record shown by the form: the draft while editing, else canonical
    pub fn current(&self) -> Option<&ArtistProfile> {
        self.draft.as_ref().or(self.canonical.as_ref())
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_uploading(&self) -> bool {
        !self.uploads.is_empty()
    }

    pub fn is_uploading_field(&self, field_name: &str) -> bool {
        self.uploads.iter().any(|(name, _)| name == field_name)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Always scored on the canonical record, never on the draft
    pub fn score(&self) -> CompletionScore {
        score_profile(self.canonical.as_ref())
    }

    pub fn layout(&self) -> Option<FormLayout> {
        self.current().map(resolve_layout)
    }

    // === Editing ===

    /// Starting twice keeps the existing draft
    pub fn begin_edit(&mut self) -> Result<(), ProfileError> {
        let canonical = self.canonical.as_ref().ok_or(ProfileError::NotLoaded)?;
        if self.draft.is_none() {
            self.draft = Some(canonical.clone());
        }
        self.notice = None;
        Ok(())
    }

    pub fn cancel(&mut self) {
        if !self.saving {
            self.draft = None;
            self.notice = None;
            self.uploads.clear();
        }
    }

    /// Rejected outside edit mode and while a save is running
    pub fn update_draft(
        &mut self,
        f: impl FnOnce(&mut ArtistProfile),
    ) -> Result<(), ProfileError> {
        if self.saving {
            return Err(ProfileError::SaveInProgress);
        }
        let draft = self.draft.as_mut().ok_or(ProfileError::NotEditing)?;
        f(draft);
        Ok(())
    }

    pub fn set_dynamic(&mut self, field_name: &str, edit: FieldEdit) -> Result<(), ProfileError> {
        self.update_draft(|draft| draft.dynamic_fields.upsert(field_name, edit.into_value()))
    }

    // === Uploads ===

    /// Shows the chosen file name in the draft and supersedes any earlier
    /// upload of the same field
    pub fn begin_upload(
        &mut self,
        field_name: &str,
        file_name: impl Into<String>,
    ) -> Result<UploadTicket, ProfileError> {
        self.set_dynamic(field_name, FieldEdit::FileChosen(file_name.into()))?;
        self.next_upload += 1;
        let generation = self.next_upload;
        match self.uploads.iter_mut().find(|(name, _)| name == field_name) {
            Some(entry) => entry.1 = generation,
            None => self.uploads.push((field_name.to_string(), generation)),
        }
        Ok(UploadTicket {
            field_name: field_name.to_string(),
            generation,
        })
    }

    /// Removes the pending entry when `ticket` is the newest for its field
    fn take_upload(&mut self, ticket: &UploadTicket) -> bool {
        let position = self
            .uploads
            .iter()
            .position(|(name, generation)| {
                name == &ticket.field_name && *generation == ticket.generation
            });
        match position {
            Some(index) => {
                self.uploads.remove(index);
                true
            }
            None => false,
        }
    }

    /// Stores the server reference; stale tickets are ignored
    pub fn upload_stored(&mut self, ticket: &UploadTicket, reference: impl Into<String>) -> bool {
        if !self.take_upload(ticket) {
            return false;
        }
        let reference = reference.into();
        if let Some(draft) = self.draft.as_mut() {
            draft
                .dynamic_fields
                .upsert(&ticket.field_name, FieldEdit::FileStored(reference).into_value());
        }
        true
    }

    /// Keeps the chosen file name and reports the failure; never touches
    /// the save state
    pub fn upload_failed(&mut self, ticket: &UploadTicket, error: impl Into<String>) -> bool {
        if !self.take_upload(ticket) {
            return false;
        }
        self.notice = Some(Notice::UploadFailed(error.into()));
        true
    }

    // === Saving ===

    /// Payload for the update request; marks the session as saving
    pub fn start_save(&mut self) -> Result<ArtistProfileUpdate, ProfileError> {
        if self.saving {
            return Err(ProfileError::SaveInProgress);
        }
        let draft = self.draft.as_ref().ok_or(ProfileError::NotEditing)?;
        if self.is_uploading() {
            return Err(ProfileError::UploadInProgress);
        }
        let payload = ArtistProfileUpdate::from_profile(draft);
        self.saving = true;
        self.notice = None;
        Ok(payload)
    }

    /// The record echoed by the server becomes canonical; without one the
    /// saved draft does
    pub fn save_succeeded(&mut self, server_record: Option<ArtistProfile>) {
        self.saving = false;
        let draft = self.draft.take();
        if let Some(record) = server_record.or(draft) {
            self.canonical = Some(record);
        }
        self.notice = Some(Notice::Saved);
    }

    pub fn save_failed(&mut self, error: impl Into<String>) {
        self.saving = false;
        self.notice = Some(Notice::SaveFailed(error.into()));
    }
}
