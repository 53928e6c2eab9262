//! Role Details tab - fields defined by the artist type

use super::super::dynamic_field::DynamicFieldsPanel;
use super::super::view_model::ArtistProfileVm;
use leptos::prelude::*;

#[component]
pub fn RoleDetailsTab(vm: ArtistProfileVm) -> impl IntoView {
    let title = vm.text(|p| match &p.artist_type {
        Some(t) if !t.name.trim().is_empty() => format!("{} Details", t.name),
        _ => "Role Details".to_string(),
    });

    view! {
        <div class="details-section">
            <h4 class="details-section__title">{move || title.get()}</h4>
            <DynamicFieldsPanel vm=vm />
        </div>
    }
}
