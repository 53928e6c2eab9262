//! Artist Profile Details UI Module
//!
//! EditDetails MVVM layout:
//! - model.rs: REST collaborators (fetch, update, upload)
//! - view_model.rs: ViewModel around the pure `ProfileEditor`
//! - page.rs: page shell with header, notices and tab routing
//! - tabs/: one component per tab
//! - dynamic_field.rs: schema-driven field renderer
//! - completion_card.rs: completion progress and checklist

mod completion_card;
mod dynamic_field;
mod model;
mod page;
mod tabs;
mod view_model;

pub use page::ArtistProfilePage;
pub use view_model::{ArtistProfileVm, ProfileTab};
