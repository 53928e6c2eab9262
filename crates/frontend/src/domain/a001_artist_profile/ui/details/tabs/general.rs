//! General tab - identity, contact and career basics

use super::super::view_model::{opt, ArtistProfileVm};
use super::ProfileField;
use crate::shared::date_utils::{format_date, input_date_value, parse_input_date, today};
use contracts::domain::a001_artist_profile::aggregate::split_list;
use leptos::prelude::*;

#[component]
pub fn GeneralTab(vm: ArtistProfileVm) -> impl IntoView {
    let editing = vm.is_editing();
    let editor = vm.editor;
    let age = Memo::new(move |_| {
        editor.with(|e| {
            e.current()
                .and_then(|p| match today() {
                    Some(today) => p.resolved_age(today),
                    None => p.age,
                })
                .map(|age| age.to_string())
                .unwrap_or_else(|| "-".to_string())
        })
    });

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Personal Information"</h4>
            <div class="details-grid--2col">
                <ProfileField
                    label="First Name"
                    value=vm.text(|p| p.first_name.clone())
                    on_input=vm.on_text(|p, v| p.first_name = v)
                    editing=editing
                    required=true
                />
                <ProfileField
                    label="Last Name"
                    value=vm.text(|p| p.last_name.clone())
                    on_input=vm.on_text(|p, v| p.last_name = v)
                    editing=editing
                    required=true
                />
                <ProfileField
                    label="Email"
                    value=vm.text(|p| p.email.clone())
                    on_input=vm.on_text(|p, v| p.email = v)
                    editing=editing
                    input_type="email"
                    required=true
                />
                <ProfileField
                    label="Phone"
                    value=vm.text(|p| p.phone.clone().unwrap_or_default())
                    on_input=vm.on_text(|p, v| p.phone = opt(v))
                    editing=editing
                    input_type="tel"
                />
                <ProfileField
                    label="Location"
                    value=vm.text(|p| p.location.clone().unwrap_or_default())
                    on_input=vm.on_text(|p, v| p.location = opt(v))
                    editing=editing
                />
                <ProfileField
                    label="Gender"
                    value=vm.text(|p| p.gender.clone().unwrap_or_default())
                    on_input=vm.on_text(|p, v| p.gender = opt(v))
                    editing=editing
                />
                <ProfileField
                    label="Date of Birth"
                    value=vm.text(|p| input_date_value(p.date_of_birth))
                    on_input=vm.on_text(|p, v| p.date_of_birth = parse_input_date(&v))
                    display=vm.text(|p| p.date_of_birth.map(format_date).unwrap_or_default())
                    editing=editing
                    input_type="date"
                />
                <div class="form__group">
                    <span class="form__label">"Age"</span>
                    <div class="form__value">{move || age.get()}</div>
                </div>
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Career"</h4>
            <div class="details-grid--2col">
                <ProfileField
                    label="Years of Experience"
                    value=vm.number(|p| p.experience_years)
                    on_input=vm.on_number(|p, n| p.experience_years = n)
                    editing=editing
                    input_type="number"
                />
                <ProfileField
                    label="Languages"
                    value=vm.text(|p| p.languages.join(", "))
                    on_input=vm.on_text(|p, v| p.languages = split_list(&v))
                    editing=editing
                    placeholder="English, Hindi"
                />
                <ProfileField
                    label="Skills"
                    value=vm.text(|p| p.skills.join(", "))
                    on_input=vm.on_text(|p, v| p.skills = split_list(&v))
                    editing=editing
                    placeholder="Horse riding, Stage combat"
                />
            </div>
            <ProfileField
                label="Bio"
                value=vm.text(|p| p.bio.clone().unwrap_or_default())
                on_input=vm.on_text(|p, v| p.bio = opt(v))
                editing=editing
                placeholder="Tell casting teams about yourself"
                multiline=true
            />
        </div>
    }
}
