use leptos::prelude::*;

/// Form label with the red required marker
#[component]
pub fn FieldLabel(
    #[prop(into)] text: String,
    #[prop(optional, into)] for_id: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] inline: bool,
) -> impl IntoView {
    let class = if inline {
        "form__checkbox-label"
    } else {
        "form__label"
    };

    view! {
        <label class=class for=move || for_id.get()>
            {text}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}
