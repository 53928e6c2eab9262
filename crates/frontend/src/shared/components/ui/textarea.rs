use super::FieldLabel;
use leptos::prelude::*;

const DEFAULT_ROWS: u32 = 4;

/// Multi-line counterpart of `Input`
#[component]
pub fn Textarea(
    #[prop(optional, into)] label: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let label = label.map(|text| {
        view! { <FieldLabel text=text for_id=id.clone() required=required /> }
    });

    view! {
        <div class="form__group">
            {label}
            <textarea
                id=id
                class="form__textarea"
                placeholder=placeholder
                rows=rows.unwrap_or(DEFAULT_ROWS)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
