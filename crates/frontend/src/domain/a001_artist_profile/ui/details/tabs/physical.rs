//! Physical & Rates tab - measurements, photo, rate and category

use super::super::view_model::{opt, ArtistProfileVm};
use super::ProfileField;
use contracts::domain::a001_artist_profile::aggregate::Category;
use leptos::prelude::*;

#[component]
pub fn PhysicalTab(vm: ArtistProfileVm) -> impl IntoView {
    let editing = vm.is_editing();
    let photo = vm.text(|p| p.profile_photo_url.clone().unwrap_or_default());
    let category_code = vm.text(|p| p.category.map(|c| c.code().to_string()).unwrap_or_default());
    let artist_type = vm.text(|p| {
        p.artist_type
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_default()
    });

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Physical Attributes"</h4>
            <div class="details-grid--2col">
                <ProfileField
                    label="Height (cm)"
                    value=vm.number(|p| p.height)
                    on_input=vm.on_number(|p, n| p.height = n)
                    editing=editing
                    input_type="number"
                />
                <ProfileField
                    label="Weight (kg)"
                    value=vm.number(|p| p.weight)
                    on_input=vm.on_number(|p, n| p.weight = n)
                    editing=editing
                    input_type="number"
                />
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Rates & Category"</h4>
            <div class="details-grid--2col">
                <ProfileField
                    label="Daily Rate"
                    value=vm.number(|p| p.daily_rate)
                    on_input=vm.on_number(|p, n| p.daily_rate = n)
                    editing=editing
                    input_type="number"
                />
                <div class="form__group">
                    <label class="form__label" for="profile-category">"Category"</label>
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <div class="form__value">
                                {move || {
                                    let code = category_code.get();
                                    if code.is_empty() {
                                        "-".to_string()
                                    } else {
                                        Category::from_code(&code).display_name().to_string()
                                    }
                                }}
                            </div>
                        }
                    >
                        <select
                            id="profile-category"
                            class="form__select"
                            prop:value=move || category_code.get()
                            on:change=move |ev| {
                                let code = event_target_value(&ev);
                                vm.update_draft(|p| {
                                    p.category = (!code.is_empty()).then(|| Category::from_code(&code))
                                });
                            }
                        >
                            <option value="">"Not set"</option>
                            {Category::ALL
                                .into_iter()
                                .map(|c| view! { <option value=c.code()>{c.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </Show>
                </div>
                <div class="form__group">
                    <span class="form__label">"Artist Type"</span>
                    <div class="form__value">
                        {move || super::or_dash(artist_type.get())}
                    </div>
                </div>
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Profile Photo"</h4>
            {move || {
                let url = photo.get();
                (!url.trim().is_empty()).then(|| view! {
                    <img class="profile-photo" src=url alt="Profile photo" />
                })
            }}
            <ProfileField
                label="Photo URL"
                value=photo
                on_input=vm.on_text(|p, v| p.profile_photo_url = opt(v))
                editing=editing
                input_type="url"
                placeholder="https://"
            />
        </div>
    }
}
