//! Artist profile: fixed attributes, role-specific dynamic fields, the
//! completion score derived from both, and the edit session around them.

pub mod aggregate;
pub mod completion;
pub mod dynamic_fields;
pub mod editor;
pub mod layout;
