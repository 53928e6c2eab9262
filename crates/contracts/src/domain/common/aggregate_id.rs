use crate::shared::error::ProfileError;
use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate with a stable string form for URLs and payloads
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, ProfileError>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, ProfileError> {
        uuid::Uuid::parse_str(s.trim()).map_err(|e| ProfileError::InvalidId(format!("{}: {}", s, e)))
    }
}
