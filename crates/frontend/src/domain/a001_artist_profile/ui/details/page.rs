//! Main page component for an artist profile (EditDetails MVVM Standard)
//!
//! Thin wrapper that:
//! - Creates ViewModel and starts the fetch
//! - Renders loading and not-found states
//! - Renders header with action buttons and the save notices
//! - Routes to tab components

use super::tabs::{CompletionTab, GeneralTab, PhysicalTab, RoleDetailsTab};
use super::view_model::{ArtistProfileVm, ProfileTab};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::system::auth::context::{clear_session, use_session};
use contracts::domain::a001_artist_profile::editor::{LoadState, Notice};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Flex, FlexAlign, FlexGap, MessageBar,
    MessageBarIntent, Spinner,
};

#[component]
pub fn ArtistProfilePage(id: String, initial_tab: ProfileTab) -> impl IntoView {
    let vm = ArtistProfileVm::new(use_session(), initial_tab);
    vm.load(id);

    let editor = vm.editor;
    let load_state = Memo::new(move |_| editor.with(|e| e.load_state().clone()));

    view! {
        <div class="details-container artist-profile">
            {move || match load_state.get() {
                LoadState::Loading => view! {
                    <div class="loading-state">
                        <Spinner />
                        <span>"Loading profile..."</span>
                    </div>
                }
                .into_any(),
                LoadState::NotFound(reason) => view! {
                    <div class="empty-state">
                        {icon("user")}
                        <h3>"Profile not found"</h3>
                        <p class="text-muted">{reason}</p>
                    </div>
                }
                .into_any(),
                LoadState::Loaded => view! {
                    <Header vm=vm />
                    <div class="details-body">
                        <NoticeDisplay vm=vm />
                        <TabBar vm=vm />
                        <TabContent vm=vm />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Name, completion badge and Edit / Save / Cancel actions
#[component]
fn Header(vm: ArtistProfileVm) -> impl IntoView {
    let editor = vm.editor;
    let name = Memo::new(move |_| {
        editor.with(|e| e.canonical().map(|p| p.display_name()).unwrap_or_default())
    });
    let score = vm.score();
    let percentage = Memo::new(move |_| score.with(|s| s.percentage));
    let is_editing = vm.is_editing();
    let can_edit = vm.can_edit();
    let is_save_disabled = vm.is_save_disabled();
    let is_saving = vm.is_saving();
    let session = vm.session;

    view! {
        <div class="details-header">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                {icon("user")}
                <h2 class="details-title">{move || name.get()}</h2>
                <Badge color=Signal::derive(move || score.with(|s| s.band().color()))>
                    {move || format!("{}% complete", percentage.get())}
                </Badge>
            </Flex>

            <div class="details-header-actions">
                <Show when=move || can_edit.get() && !is_editing.get()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.begin_edit()
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                </Show>

                <Show when=move || is_editing.get()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save()
                        disabled=is_save_disabled
                    >
                        {icon("save")}
                        {move || if is_saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.cancel()
                        disabled=is_saving
                    >
                        {icon("x")}
                        " Cancel"
                    </Button>
                </Show>

                <Show when=move || session.with(|s| s.is_authenticated())>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| clear_session()
                    >
                        {icon("log-out")}
                        " Sign out"
                    </Button>
                </Show>
            </div>
        </div>
    }
}

/// Result of the last save or upload
#[component]
fn NoticeDisplay(vm: ArtistProfileVm) -> impl IntoView {
    let notice = vm.notice();

    view! {
        {move || notice.get().map(|notice| {
            let (intent, text) = match notice {
                Notice::Saved => (MessageBarIntent::Success, "Profile saved".to_string()),
                Notice::SaveFailed(e) | Notice::UploadFailed(e) => (MessageBarIntent::Error, e),
            };
            view! {
                <div style="margin-bottom: var(--spacing-md);">
                    <MessageBar intent=intent>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <span>{text}</span>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                on_click=move |_| vm.dismiss_notice()
                            >
                                {icon("x")}
                            </Button>
                        </Flex>
                    </MessageBar>
                </div>
            }
        })}
    }
}

/// Tab bar component using THAW buttons
#[component]
fn TabBar(vm: ArtistProfileVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            {ProfileTab::ALL
                .into_iter()
                .map(|tab| view! {
                    <Button
                        appearance=Signal::derive(move || if active_tab.get() == tab {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        })
                        size=ButtonSize::Small
                        on_click=move |_| vm.set_tab(tab)
                    >
                        <span class="tab-icon">{icon(tab.icon())}</span>
                        {tab.label()}
                    </Button>
                })
                .collect_view()}
        </Flex>
    }
}

/// Tab content component - routes to the active tab
#[component]
fn TabContent(vm: ArtistProfileVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        {move || match active_tab.get() {
            ProfileTab::General => view! { <GeneralTab vm=vm /> }.into_any(),
            ProfileTab::PhysicalRates => view! { <PhysicalTab vm=vm /> }.into_any(),
            ProfileTab::RoleDetails => view! { <RoleDetailsTab vm=vm /> }.into_any(),
            ProfileTab::Completion => view! { <CompletionTab vm=vm /> }.into_any(),
        }}
    }
}
