//! Field kind enumeration for role schemas

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Input kind of a schema field. Decides both rendering and value coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldKind {
    #[default]
    Text,
    TextArea,
    Number,
    File,
    Url,
    Boolean,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Number => "number",
            Self::File => "file",
            Self::Url => "url",
            Self::Boolean => "boolean",
        }
    }

    /// Parse a server tag. Unknown tags fall back to `Text`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "textarea" | "text_area" => Self::TextArea,
            "number" => Self::Number,
            "file" => Self::File,
            "url" | "link" => Self::Url,
            "boolean" | "bool" | "checkbox" => Self::Boolean,
            _ => Self::Text,
        }
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    // Non-string tags (numbers, null) are treated like unknown strings.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().map(Self::from_tag).unwrap_or_default())
    }
}
