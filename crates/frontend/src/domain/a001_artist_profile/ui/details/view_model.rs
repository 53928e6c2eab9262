//! ViewModel for the artist profile page (EditDetails MVVM Standard)
//!
//! All edit-session rules live in `ProfileEditor`; this type only wires it
//! to signals and to the REST collaborators in `model`.

use super::model;
use contracts::domain::a001_artist_profile::aggregate::{ArtistProfile, ArtistProfileId};
use contracts::domain::a001_artist_profile::completion::CompletionScore;
use contracts::domain::a001_artist_profile::dynamic_fields::format_number;
use contracts::domain::a001_artist_profile::editor::{Notice, ProfileEditor};
use contracts::domain::a001_artist_profile::layout::FieldEdit;
use contracts::domain::common::AggregateId;
use contracts::system::auth::Session;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// How long the "saved" message stays visible
const SAVED_NOTICE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    General,
    PhysicalRates,
    RoleDetails,
    Completion,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::General,
        ProfileTab::PhysicalRates,
        ProfileTab::RoleDetails,
        ProfileTab::Completion,
    ];

    /// Key used in the `tab` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            ProfileTab::General => "general",
            ProfileTab::PhysicalRates => "physical",
            ProfileTab::RoleDetails => "role",
            ProfileTab::Completion => "completion",
        }
    }

    /// Unknown keys open the General tab
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key() == key.trim())
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::General => "General",
            ProfileTab::PhysicalRates => "Physical & Rates",
            ProfileTab::RoleDetails => "Role Details",
            ProfileTab::Completion => "Completion",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProfileTab::General => "file-text",
            ProfileTab::PhysicalRates => "ruler",
            ProfileTab::RoleDetails => "sliders",
            ProfileTab::Completion => "pie-chart",
        }
    }
}

/// ViewModel for the artist profile page
#[derive(Clone, Copy)]
pub struct ArtistProfileVm {
    pub id: RwSignal<String>,
    pub editor: RwSignal<ProfileEditor>,
    pub session: RwSignal<Session>,

    // === UI State ===
    pub active_tab: RwSignal<ProfileTab>,
}

impl ArtistProfileVm {
    pub fn new(session: RwSignal<Session>, initial_tab: ProfileTab) -> Self {
        Self {
            id: RwSignal::new(String::new()),
            editor: RwSignal::new(ProfileEditor::new()),
            session,
            active_tab: RwSignal::new(initial_tab),
        }
    }

    // === Derived signals ===

    /// Memoized; edit-mode views stay mounted while the draft changes
    pub fn is_editing(&self) -> Signal<bool> {
        let editor = self.editor;
        Memo::new(move |_| editor.with(ProfileEditor::is_editing)).into()
    }

    pub fn is_saving(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(ProfileEditor::is_saving))
    }

    /// Score of the canonical record
    pub fn score(&self) -> Signal<CompletionScore> {
        let editor = self.editor;
        Signal::derive(move || editor.with(ProfileEditor::score))
    }

    pub fn can_edit(&self) -> Signal<bool> {
        let editor = self.editor;
        let session = self.session;
        Signal::derive(move || {
            editor.with(|e| {
                e.canonical()
                    .map(|profile| session.with(|s| s.can_edit_profile(profile)))
                    .unwrap_or(false)
            })
        })
    }

    /// Save is blocked while a save or an upload is running
    pub fn is_save_disabled(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.is_saving() || e.is_uploading()))
    }

    pub fn notice(&self) -> Signal<Option<Notice>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.notice().cloned()))
    }

    // === Field bindings ===

    /// Text of one core field. Memoized: the input is rewritten only when
    /// the stored value changes, so partial input like "1." stays put.
    pub fn text(&self, get: fn(&ArtistProfile) -> String) -> Signal<String> {
        self.text_with(get)
    }

    pub fn number(&self, get: fn(&ArtistProfile) -> Option<f64>) -> Signal<String> {
        self.text_with(move |p| get(p).map(format_number).unwrap_or_default())
    }

    fn text_with(
        &self,
        get: impl Fn(&ArtistProfile) -> String + Send + Sync + 'static,
    ) -> Signal<String> {
        let editor = self.editor;
        Memo::new(move |_| editor.with(|e| e.current().map(|p| get(p)).unwrap_or_default()))
            .into()
    }

    pub fn on_text(&self, set: fn(&mut ArtistProfile, String)) -> Callback<String> {
        let this = *self;
        Callback::new(move |value: String| this.update_draft(|p| set(p, value)))
    }

    pub fn on_number(&self, set: fn(&mut ArtistProfile, Option<f64>)) -> Callback<String> {
        let this = *self;
        Callback::new(move |value: String| {
            let parsed = parse_number(&value);
            this.update_draft(|p| set(p, parsed))
        })
    }

    // === Data loading ===

    pub fn load(&self, id: String) {
        let this = *self;
        this.id.set(id.clone());
        this.editor.set(ProfileEditor::new());

        if let Err(e) = ArtistProfileId::from_string(&id) {
            log::warn!("not requesting profile: {}", e);
            this.editor.update(|editor| editor.load_failed(model::NOT_FOUND));
            return;
        }

        leptos::task::spawn_local(async move {
            let session = this.session.get_untracked();
            match model::fetch_profile(&id, &session).await {
                Ok(profile) => {
                    log::info!("loaded artist profile {}", profile.id);
                    this.editor.update(|e| e.loaded(profile));
                }
                Err(e) => {
                    log::warn!("failed to load artist profile {}: {}", id, e);
                    this.editor.update(|editor| editor.load_failed(e));
                }
            }
        });
    }

    // === Commands ===

    /// Switch tabs and keep the address shareable
    pub fn set_tab(&self, tab: ProfileTab) {
        self.active_tab.set(tab);
        let query = format!(
            "?profile={}&tab={}",
            urlencoding::encode(&self.id.get_untracked()),
            tab.key()
        );
        let history = web_sys::window().and_then(|w| w.history().ok());
        if let Some(history) = history {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&query)) {
                log::debug!("could not update address: {:?}", e);
            }
        }
    }

    pub fn begin_edit(&self) {
        if !self.can_edit().get_untracked() {
            log::warn!("edit requested without permission");
            return;
        }
        if let Some(Err(e)) = self.editor.try_update(ProfileEditor::begin_edit) {
            log::warn!("cannot start editing: {}", e);
        }
    }

    pub fn cancel(&self) {
        self.editor.update(ProfileEditor::cancel);
    }

    /// Apply a change to the draft; ignored outside edit mode
    pub fn update_draft(&self, f: impl FnOnce(&mut ArtistProfile)) {
        if let Some(Err(e)) = self.editor.try_update(|editor| editor.update_draft(f)) {
            log::debug!("draft change ignored: {}", e);
        }
    }

    pub fn set_dynamic(&self, field_name: &str, edit: FieldEdit) {
        if let Some(Err(e)) = self
            .editor
            .try_update(|editor| editor.set_dynamic(field_name, edit))
        {
            log::debug!("field change ignored for {}: {}", field_name, e);
        }
    }

    /// The file name is shown at once; the stored reference replaces it
    /// when the newest upload of the field returns
    pub fn on_file_chosen(&self, field_name: String, file: web_sys::File) {
        let ticket = match self
            .editor
            .try_update(|editor| editor.begin_upload(&field_name, file.name()))
        {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log::warn!("upload for {} not started: {}", field_name, e);
                return;
            }
            None => return,
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            let session = this.session.get_untracked();
            let applied = match model::upload_file(&session, file).await {
                Ok(reference) => this
                    .editor
                    .try_update(|editor| editor.upload_stored(&ticket, reference)),
                Err(e) => {
                    log::error!("upload for {} failed: {}", ticket.field_name(), e);
                    this.editor.try_update(|editor| {
                        editor.upload_failed(&ticket, format!("Upload failed: {}", e))
                    })
                }
            };
            if applied == Some(true) {
                log::info!("upload finished for {}", ticket.field_name());
            } else {
                log::debug!("superseded upload for {} ignored", ticket.field_name());
            }
        });
    }

    pub fn save(&self) {
        if !self.can_edit().get_untracked() {
            log::warn!("save requested without permission");
            return;
        }
        let payload = match self.editor.try_update(ProfileEditor::start_save) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                log::warn!("cannot save: {}", e);
                return;
            }
            None => return,
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            let id = this.id.get_untracked();
            let session = this.session.get_untracked();
            match model::update_profile(&id, &session, &payload).await {
                Ok(echoed) => {
                    log::info!("saved artist profile {}", id);
                    this.editor.update(|e| e.save_succeeded(echoed));
                    gloo_timers::future::TimeoutFuture::new(SAVED_NOTICE_MS).await;
                    this.editor.update(|e| {
                        if e.notice() == Some(&Notice::Saved) {
                            e.clear_notice();
                        }
                    });
                }
                Err(e) => {
                    log::error!("failed to save artist profile {}: {}", id, e);
                    this.editor
                        .update(|editor| editor.save_failed(format!("Could not save: {}", e)));
                }
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.editor.update(ProfileEditor::clear_notice);
    }
}

/// Blank or unparsable input clears the number
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Optional text field: blank input is stored as absent
pub fn opt(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 172.5 "), Some(172.5));
        assert_eq!(parse_number("1."), Some(1.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_opt() {
        assert_eq!(opt("  ".into()), None);
        assert_eq!(opt("Pune".into()), Some("Pune".into()));
    }

    #[test]
    fn test_tab_keys() {
        for tab in ProfileTab::ALL {
            assert_eq!(ProfileTab::from_key(tab.key()), tab);
        }
        assert_eq!(ProfileTab::from_key("physical"), ProfileTab::PhysicalRates);
        assert_eq!(ProfileTab::from_key(""), ProfileTab::General);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(ProfileTab::PhysicalRates.label(), "Physical & Rates");
        assert_eq!(ProfileTab::RoleDetails.label(), "Role Details");
    }
}
