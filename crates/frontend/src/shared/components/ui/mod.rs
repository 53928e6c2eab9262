//! Form primitives shared by the profile views

mod badge;
mod checkbox;
mod field_label;
mod input;
mod textarea;

pub use badge::Badge;
pub use checkbox::Checkbox;
pub use field_label::FieldLabel;
pub use input::Input;
pub use textarea::Textarea;
