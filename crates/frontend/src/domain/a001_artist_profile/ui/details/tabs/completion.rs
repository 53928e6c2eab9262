//! Completion tab

use super::super::completion_card::CompletionCard;
use super::super::view_model::ArtistProfileVm;
use leptos::prelude::*;

#[component]
pub fn CompletionTab(vm: ArtistProfileVm) -> impl IntoView {
    view! { <CompletionCard score=vm.score() /> }
}
