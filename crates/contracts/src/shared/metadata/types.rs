//! Role schema types: field descriptors and the artist type that owns them

use super::field_type::FieldKind;
use super::validation;
use serde::{Deserialize, Serialize};

// ============================================================================
// Field-level metadata
// ============================================================================

/// Server-provided description of one dynamic profile field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique key within one artist type
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default, deserialize_with = "validation::lenient_bool")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(
        default,
        deserialize_with = "validation::lenient_options",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Label for display; servers occasionally omit it
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    pub fn placeholder_text(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| format!("Enter {}", self.display_label().to_lowercase()))
    }
}

// ============================================================================
// Artist type (role schema)
// ============================================================================

/// A role with its own set of extra profile fields (Dancer, Actor, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtistType {
    #[serde(
        default,
        deserialize_with = "validation::lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Normalized on deserialization: unnamed and duplicate entries are dropped
    #[serde(default, deserialize_with = "validation::lenient_fields")]
    pub fields: Vec<FieldDescriptor>,
}

impl ArtistType {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            id: None,
            name: name.into(),
            fields: validation::normalize_fields(fields),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}
