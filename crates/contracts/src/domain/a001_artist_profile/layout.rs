//! Form layout of the role-specific profile section.
//!
//! Decides which descriptors are rendered and how each one is presented in
//! edit and read mode. The view layer only turns these decisions into DOM.

use super::aggregate::{ArtistProfile, Category};
use super::dynamic_fields::{DynamicFields, FieldValue, TypedFieldValue};
use crate::shared::metadata::{FieldDescriptor, FieldKind};

// ============================================================================
// Layout resolution
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    /// Fields come from the role schema
    Schema,
    /// Role has no schema; a built-in layout for the category is used
    Legacy(Category),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    pub source: LayoutSource,
    pub fields: Vec<FieldDescriptor>,
}

impl FormLayout {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn controls(&self, values: &DynamicFields) -> Vec<FieldControl> {
        self.fields
            .iter()
            .map(|descriptor| FieldControl::build(descriptor, values.get(&descriptor.name)))
            .collect()
    }
}

/// Schema fields win; without them Actor and Dancer fall back to their
/// built-in layouts and every other category renders nothing.
pub fn resolve_layout(profile: &ArtistProfile) -> FormLayout {
    let schema = profile.schema_fields();
    if !schema.is_empty() {
        return FormLayout {
            source: LayoutSource::Schema,
            fields: schema.to_vec(),
        };
    }

    let category = profile.category.or_else(|| {
        profile
            .artist_type
            .as_ref()
            .map(|t| Category::from_code(&t.name))
    });

    match category.and_then(|c| legacy_fields(c).map(|fields| (c, fields))) {
        Some((category, fields)) => FormLayout {
            source: LayoutSource::Legacy(category),
            fields,
        },
        None => FormLayout {
            source: LayoutSource::Empty,
            fields: Vec::new(),
        },
    }
}

pub fn legacy_fields(category: Category) -> Option<Vec<FieldDescriptor>> {
    match category {
        Category::Actor => Some(vec![
            FieldDescriptor::new("actingStyles", "Acting Styles", FieldKind::Text)
                .with_options(["Method", "Classical", "Improv", "Comedy"]),
            FieldDescriptor::new("trainingInstitute", "Training Institute", FieldKind::Text),
            FieldDescriptor::new("theatreCredits", "Theatre Credits", FieldKind::TextArea),
            FieldDescriptor::new("screenCredits", "Film & TV Credits", FieldKind::TextArea),
            FieldDescriptor::new("showreelUrl", "Showreel", FieldKind::Url)
                .with_placeholder("https://"),
            FieldDescriptor::new("performsStunts", "Performs Own Stunts", FieldKind::Boolean),
        ]),
        Category::Dancer => Some(vec![
            FieldDescriptor::new("danceStyles", "Dance Styles", FieldKind::Text)
                .with_options(["Ballet", "Contemporary", "Hip-hop", "Kathak", "Salsa"]),
            FieldDescriptor::new("danceTraining", "Training", FieldKind::TextArea),
            FieldDescriptor::new("performanceCredits", "Performance Credits", FieldKind::TextArea),
            FieldDescriptor::new("danceReelUrl", "Dance Reel", FieldKind::Url)
                .with_placeholder("https://"),
            FieldDescriptor::new("choreographs", "Choreographs", FieldKind::Boolean),
        ]),
        Category::Model | Category::Singer | Category::Musician | Category::Other => None,
    }
}

// ============================================================================
// Per-field presentation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    SingleLine,
    MultiLine,
    Numeric,
    UrlInput,
    Toggle,
    FileSlot,
}

impl EditorKind {
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => EditorKind::SingleLine,
            FieldKind::TextArea => EditorKind::MultiLine,
            FieldKind::Number => EditorKind::Numeric,
            FieldKind::Url => EditorKind::UrlInput,
            FieldKind::Boolean => EditorKind::Toggle,
            FieldKind::File => EditorKind::FileSlot,
        }
    }

    /// `type` attribute of the backing `<input>`
    pub fn input_type(&self) -> &'static str {
        match self {
            EditorKind::Numeric => "number",
            EditorKind::UrlInput => "url",
            EditorKind::Toggle => "checkbox",
            EditorKind::SingleLine | EditorKind::MultiLine | EditorKind::FileSlot => "text",
        }
    }
}

pub const NO_FILE_UPLOADED: &str = "No file uploaded";

#[derive(Debug, Clone, PartialEq)]
pub enum ReadDisplay {
    Dash,
    Text(String),
    Link(String),
    Flag(bool),
    File(Option<String>),
}

impl ReadDisplay {
    pub fn text(&self) -> String {
        match self {
            ReadDisplay::Dash => "-".to_string(),
            ReadDisplay::Text(s) | ReadDisplay::Link(s) => s.clone(),
            ReadDisplay::Flag(true) => "✓".to_string(),
            ReadDisplay::Flag(false) => String::new(),
            ReadDisplay::File(Some(name)) => name.clone(),
            ReadDisplay::File(None) => NO_FILE_UPLOADED.to_string(),
        }
    }
}

/// Everything a view needs to render one dynamic field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldControl {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub placeholder: String,
    pub options: Vec<String>,
    pub editor: EditorKind,
    /// Current text for text-like editors
    pub edit_text: String,
    /// Current state for the toggle editor
    pub checked: bool,
    pub read: ReadDisplay,
}

impl FieldControl {
    pub fn build(descriptor: &FieldDescriptor, value: Option<&FieldValue>) -> Self {
        let typed = value.and_then(|v| TypedFieldValue::interpret(descriptor.kind, v));
        let checked = matches!(typed, Some(TypedFieldValue::Flag(true)));

        let read = match (descriptor.kind, typed) {
            (FieldKind::Boolean, _) => ReadDisplay::Flag(checked),
            (FieldKind::File, Some(TypedFieldValue::FileRef(name))) => ReadDisplay::File(Some(name)),
            (FieldKind::File, _) => ReadDisplay::File(None),
            (FieldKind::Url, Some(TypedFieldValue::Link(url))) => ReadDisplay::Link(url),
            (_, Some(TypedFieldValue::Number(n))) => {
                ReadDisplay::Text(super::dynamic_fields::format_number(n))
            }
            (_, Some(TypedFieldValue::Text(s))) if !s.trim().is_empty() => ReadDisplay::Text(s),
            _ => ReadDisplay::Dash,
        };

        Self {
            name: descriptor.name.clone(),
            label: descriptor.display_label().to_string(),
            required: descriptor.required,
            placeholder: descriptor.placeholder_text(),
            options: descriptor.options.clone(),
            editor: EditorKind::for_kind(descriptor.kind),
            edit_text: value.map(FieldValue::as_text).unwrap_or_default(),
            checked,
            read,
        }
    }
}

// ============================================================================
// Edits
// ============================================================================

/// Edit dispatched by a field control
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Text(String),
    Checked(bool),
    /// A file was picked; its display name is stored until the upload
    /// returns a reference
    FileChosen(String),
    /// Reference returned by the upload collaborator
    FileStored(String),
}

impl FieldEdit {
    /// Numeric edits stay text; they are coerced when persisting
    pub fn into_value(self) -> FieldValue {
        match self {
            FieldEdit::Text(s) | FieldEdit::FileChosen(s) | FieldEdit::FileStored(s) => {
                FieldValue::Text(s)
            }
            FieldEdit::Checked(b) => FieldValue::Bool(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_artist_profile::aggregate::ArtistProfileId;
    use crate::shared::metadata::ArtistType;

    fn profile(category: Option<Category>, fields: Vec<FieldDescriptor>) -> ArtistProfile {
        let mut profile = ArtistProfile::new(ArtistProfileId::new_v4(), "A", "B", "a@b.c");
        profile.category = category;
        profile.artist_type = Some(ArtistType::new("Role", fields));
        profile
    }

    #[test]
    fn test_schema_wins_over_category() {
        let profile = profile(
            Some(Category::Actor),
            vec![FieldDescriptor::new("voice", "Voice Type", FieldKind::Text)],
        );
        let layout = resolve_layout(&profile);
        assert_eq!(layout.source, LayoutSource::Schema);
        assert_eq!(layout.fields.len(), 1);
    }

    #[test]
    fn test_empty_schema_actor_falls_back_to_legacy_layout() {
        let layout = resolve_layout(&profile(Some(Category::Actor), vec![]));
        assert_eq!(layout.source, LayoutSource::Legacy(Category::Actor));
        assert!(!layout.is_empty());
        assert!(layout.fields.iter().any(|f| f.name == "showreelUrl"));
    }

    #[test]
    fn test_dancer_legacy_layout_from_artist_type_name() {
        let mut p = profile(None, vec![]);
        p.artist_type.as_mut().unwrap().name = "Dancer".into();
        let layout = resolve_layout(&p);
        assert_eq!(layout.source, LayoutSource::Legacy(Category::Dancer));
    }

    #[test]
    fn test_other_category_renders_nothing() {
        let layout = resolve_layout(&profile(Some(Category::Singer), vec![]));
        assert_eq!(layout.source, LayoutSource::Empty);
        assert!(layout.is_empty());

        let mut bare = ArtistProfile::new(ArtistProfileId::new_v4(), "A", "B", "a@b.c");
        bare.category = None;
        assert_eq!(resolve_layout(&bare).source, LayoutSource::Empty);
    }

    #[test]
    fn test_controls_per_kind() {
        let descriptors = vec![
            FieldDescriptor::new("bio", "Long Bio", FieldKind::TextArea),
            FieldDescriptor::new("reel", "Reel", FieldKind::Url),
            FieldDescriptor::new("height", "Height", FieldKind::Number),
            FieldDescriptor::new("teaches", "Teaches", FieldKind::Boolean),
            FieldDescriptor::new("headshot", "Headshot", FieldKind::File),
            FieldDescriptor::new("accent", "Accent", FieldKind::Text).required(),
        ];
        let layout = resolve_layout(&profile(None, descriptors));

        let mut values = DynamicFields::new();
        values.upsert("reel", "https://vimeo.com/1".into());
        values.upsert("height", "172".into());
        values.upsert("teaches", true.into());

        let controls = layout.controls(&values);

        assert_eq!(controls[0].editor, EditorKind::MultiLine);
        assert_eq!(controls[0].read, ReadDisplay::Dash);
        assert_eq!(controls[1].read, ReadDisplay::Link("https://vimeo.com/1".into()));
        assert_eq!(controls[1].editor.input_type(), "url");
        assert_eq!(controls[2].edit_text, "172");
        assert_eq!(controls[2].read.text(), "172");
        assert!(controls[3].checked);
        assert_eq!(controls[3].read.text(), "✓");
        assert_eq!(controls[4].read.text(), NO_FILE_UPLOADED);
        assert_eq!(controls[4].editor, EditorKind::FileSlot);
        assert!(controls[5].required);
        assert_eq!(controls[5].read.text(), "-");
        assert_eq!(controls[5].placeholder, "Enter accent");
    }

    #[test]
    fn test_file_and_flag_read_display() {
        let file = FieldDescriptor::new("cv", "CV", FieldKind::File);
        let control = FieldControl::build(&file, Some(&FieldValue::text("cv.pdf")));
        assert_eq!(control.read, ReadDisplay::File(Some("cv.pdf".into())));

        let flag = FieldDescriptor::new("swim", "Swims", FieldKind::Boolean);
        let control = FieldControl::build(&flag, None);
        assert_eq!(control.read, ReadDisplay::Flag(false));
        assert_eq!(control.read.text(), "");
    }

    #[test]
    fn test_edits_become_stored_values() {
        assert_eq!(FieldEdit::Text("12".into()).into_value(), FieldValue::text("12"));
        assert_eq!(FieldEdit::Checked(false).into_value(), FieldValue::Bool(false));
        assert_eq!(
            FieldEdit::FileChosen("reel.mp4".into()).into_value(),
            FieldValue::text("reel.mp4")
        );
    }
}
