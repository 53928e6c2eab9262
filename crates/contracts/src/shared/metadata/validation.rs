//! Lenient parsing and normalization of role schemas.
//!
//! A schema that does not match the expected shape degrades to fewer (or
//! zero) fields instead of failing the whole profile payload.

use super::types::FieldDescriptor;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;

/// Drop unnamed descriptors and keep the first descriptor of each name
pub fn normalize_fields(fields: Vec<FieldDescriptor>) -> Vec<FieldDescriptor> {
    let mut seen = HashSet::new();
    fields
        .into_iter()
        .filter(|f| !f.name.trim().is_empty())
        .filter(|f| seen.insert(f.name.clone()))
        .collect()
}

pub(crate) fn lenient_fields<'de, D>(deserializer: D) -> Result<Vec<FieldDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = raw else {
        return Ok(Vec::new());
    };

    let parsed = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<FieldDescriptor>(item).ok())
        .collect();
    Ok(normalize_fields(parsed))
}

pub(crate) fn lenient_options<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = raw else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect())
}

pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}
