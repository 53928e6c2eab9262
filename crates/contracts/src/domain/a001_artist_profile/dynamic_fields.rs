//! Sparse store of role-specific field values, keyed by field name.

use crate::shared::metadata::{ArtistType, FieldKind};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Wire value
// ============================================================================

/// Value as it travels over the wire. Its meaning depends on the
/// descriptor of the field it belongs to, see [`TypedFieldValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text form used to fill an input control
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }

    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(Self::Text(s)),
            other => Some(Self::Text(other.to_string())),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Integral numbers print without a fractional part ("180", not "180.0")
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

// ============================================================================
// Interpreted value
// ============================================================================

/// A stored value interpreted through the kind of its descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum TypedFieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    FileRef(String),
    Link(String),
}

impl TypedFieldValue {
    /// `None` when the stored value is blank for this kind
    pub fn interpret(kind: FieldKind, value: &FieldValue) -> Option<Self> {
        if value.is_blank() {
            return None;
        }

        Some(match kind {
            FieldKind::Number => match value {
                FieldValue::Number(n) => Self::Number(*n),
                FieldValue::Text(s) => match s.trim().parse::<f64>() {
                    Ok(n) if n.is_finite() => Self::Number(n),
                    _ => Self::Text(s.clone()),
                },
                FieldValue::Bool(b) => Self::Number(if *b { 1.0 } else { 0.0 }),
            },
            FieldKind::Boolean => match value {
                FieldValue::Bool(b) => Self::Flag(*b),
                FieldValue::Number(n) => Self::Flag(*n != 0.0),
                FieldValue::Text(s) => match parse_flag(s) {
                    Some(b) => Self::Flag(b),
                    None => Self::Text(s.clone()),
                },
            },
            FieldKind::File => Self::FileRef(value.as_text()),
            FieldKind::Url => Self::Link(value.as_text()),
            FieldKind::Text | FieldKind::TextArea => Self::Text(value.as_text()),
        })
    }

    /// Wire form of the interpreted value
    pub fn into_wire(self) -> FieldValue {
        match self {
            Self::Number(n) => FieldValue::Number(n),
            Self::Flag(b) => FieldValue::Bool(b),
            Self::Text(s) | Self::FileRef(s) | Self::Link(s) => FieldValue::Text(s),
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicFieldValue {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    #[serde(default, deserialize_with = "lenient_value")]
    pub value: Option<FieldValue>,
}

fn lenient_value<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(FieldValue::from_json))
}

/// Ordered collection with at most one entry per field name
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct DynamicFields(Vec<DynamicFieldValue>);

impl DynamicFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field_name: &str) -> Option<&FieldValue> {
        self.0
            .iter()
            .find(|entry| entry.field_name == field_name)
            .and_then(|entry| entry.value.as_ref())
    }

    /// Replace the value of an existing entry or append a new one
    pub fn upsert(&mut self, field_name: &str, value: FieldValue) {
        self.put(field_name, Some(value));
    }

    pub fn remove(&mut self, field_name: &str) -> Option<FieldValue> {
        let index = self.0.iter().position(|e| e.field_name == field_name)?;
        self.0.remove(index).value
    }

    fn put(&mut self, field_name: &str, value: Option<FieldValue>) {
        match self.0.iter_mut().find(|e| e.field_name == field_name) {
            Some(entry) => entry.value = value,
            None => self.0.push(DynamicFieldValue {
                field_name: field_name.to_string(),
                value,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DynamicFieldValue> {
        self.0.iter()
    }

    /// Persistence form: numeric and boolean text is converted to JSON
    /// numbers and bools where the schema says so. Entries without a
    /// descriptor pass through untouched.
    pub fn coerced_for(&self, artist_type: Option<&ArtistType>) -> Self {
        let entries = self
            .0
            .iter()
            .map(|entry| {
                let kind = artist_type
                    .and_then(|t| t.field(&entry.field_name))
                    .map(|d| d.kind);
                let value = match (kind, entry.value.as_ref()) {
                    (Some(kind @ (FieldKind::Number | FieldKind::Boolean)), Some(value)) => {
                        match TypedFieldValue::interpret(kind, value) {
                            Some(typed) => Some(typed.into_wire()),
                            None => entry.value.clone(),
                        }
                    }
                    _ => entry.value.clone(),
                };
                DynamicFieldValue {
                    field_name: entry.field_name.clone(),
                    value,
                }
            })
            .collect();
        Self(entries)
    }
}

impl<'de> Deserialize<'de> for DynamicFields {
    // Duplicate names collapse onto the first position with the last value.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        let Some(Value::Array(items)) = raw else {
            return Ok(Self::default());
        };

        let mut fields = Self::default();
        for item in items {
            if let Ok(entry) = serde_json::from_value::<DynamicFieldValue>(item) {
                fields.put(&entry.field_name, entry.value);
            }
        }
        Ok(fields)
    }
}

impl FromIterator<(String, FieldValue)> for DynamicFields {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut fields = Self::default();
        for (name, value) in iter {
            fields.upsert(&name, value);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::FieldDescriptor;
    use serde_json::json;

    #[test]
    fn test_upsert_replaces_existing_entry() {
        let mut fields = DynamicFields::new();
        fields.upsert("styles", "Ballet".into());
        fields.upsert("reel", "https://reel.example".into());
        fields.upsert("styles", "Jazz".into());

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("styles"), Some(&FieldValue::text("Jazz")));
        assert_eq!(fields.iter().next().unwrap().field_name, "styles");
    }

    #[test]
    fn test_upsert_same_edit_twice_is_idempotent() {
        let mut fields = DynamicFields::new();
        fields.upsert("height", "172".into());
        fields.upsert("height", "172".into());

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("height"), Some(&FieldValue::text("172")));
    }

    #[test]
    fn test_remove() {
        let mut fields: DynamicFields = vec![("a".to_string(), FieldValue::Bool(true))]
            .into_iter()
            .collect();
        assert_eq!(fields.remove("a"), Some(FieldValue::Bool(true)));
        assert_eq!(fields.remove("a"), None);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let fields: DynamicFields = serde_json::from_value(json!([
            { "fieldName": "canSing", "value": true },
            { "fieldName": "experience", "value": 4 },
            { "fieldName": "styles", "value": "Ballet" },
            { "fieldName": "notes", "value": null },
            { "fieldName": "tags", "value": ["a", "b"] },
            { "value": "orphan" },
            { "fieldName": "styles", "value": "Jazz" }
        ]))
        .unwrap();

        assert_eq!(fields.len(), 5);
        assert_eq!(fields.get("canSing"), Some(&FieldValue::Bool(true)));
        assert_eq!(fields.get("experience"), Some(&FieldValue::Number(4.0)));
        assert_eq!(fields.get("styles"), Some(&FieldValue::text("Jazz")));
        assert_eq!(fields.get("notes"), None);
        assert_eq!(fields.get("tags"), Some(&FieldValue::text("[\"a\",\"b\"]")));
    }

    #[test]
    fn test_deserialize_null_list() {
        let fields: DynamicFields = serde_json::from_value(json!(null)).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut fields = DynamicFields::new();
        fields.upsert("reel", "x".into());
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!([{ "fieldName": "reel", "value": "x" }])
        );
    }

    #[test]
    fn test_interpret_number() {
        let typed = TypedFieldValue::interpret(FieldKind::Number, &FieldValue::text(" 12.5 "));
        assert_eq!(typed, Some(TypedFieldValue::Number(12.5)));

        let typed = TypedFieldValue::interpret(FieldKind::Number, &FieldValue::text("tall"));
        assert_eq!(typed, Some(TypedFieldValue::Text("tall".into())));

        assert_eq!(
            TypedFieldValue::interpret(FieldKind::Number, &FieldValue::text("  ")),
            None
        );
    }

    #[test]
    fn test_interpret_boolean_and_links() {
        assert_eq!(
            TypedFieldValue::interpret(FieldKind::Boolean, &FieldValue::text("Yes")),
            Some(TypedFieldValue::Flag(true))
        );
        assert_eq!(
            TypedFieldValue::interpret(FieldKind::Boolean, &FieldValue::Number(0.0)),
            Some(TypedFieldValue::Flag(false))
        );
        assert_eq!(
            TypedFieldValue::interpret(FieldKind::Url, &FieldValue::text("https://a.b")),
            Some(TypedFieldValue::Link("https://a.b".into()))
        );
        assert_eq!(
            TypedFieldValue::interpret(FieldKind::File, &FieldValue::text("headshot.png")),
            Some(TypedFieldValue::FileRef("headshot.png".into()))
        );
    }

    #[test]
    fn test_coerced_for_schema() {
        let artist_type = ArtistType::new(
            "Dancer",
            vec![
                FieldDescriptor::new("years", "Years", FieldKind::Number),
                FieldDescriptor::new("teaches", "Teaches", FieldKind::Boolean),
                FieldDescriptor::new("styles", "Styles", FieldKind::Text),
            ],
        );
        let mut fields = DynamicFields::new();
        fields.upsert("years", "7".into());
        fields.upsert("teaches", "true".into());
        fields.upsert("styles", "42".into());
        fields.upsert("legacy", "kept".into());
        fields.upsert("weight", "n/a".into());

        let coerced = fields.coerced_for(Some(&artist_type));

        assert_eq!(coerced.get("years"), Some(&FieldValue::Number(7.0)));
        assert_eq!(coerced.get("teaches"), Some(&FieldValue::Bool(true)));
        assert_eq!(coerced.get("styles"), Some(&FieldValue::text("42")));
        assert_eq!(coerced.get("legacy"), Some(&FieldValue::text("kept")));
        assert_eq!(coerced.get("weight"), Some(&FieldValue::text("n/a")));
        assert_eq!(fields.coerced_for(None), fields);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(180.0), "180");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(62.5), "62.5");
    }
}
