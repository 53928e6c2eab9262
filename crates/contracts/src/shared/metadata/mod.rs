//! Role schema metadata: the server-provided description of the extra
//! profile fields an artist type carries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{ArtistType, FieldKind};
//!
//! let artist_type: ArtistType = serde_json::from_value(json)?;
//! for field in &artist_type.fields {
//!     if field.kind == FieldKind::File {
//!         println!("{} expects an upload", field.display_label());
//!     }
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{ArtistType, FieldDescriptor};
pub use validation::normalize_fields;
