use super::FieldLabel;
use leptos::prelude::*;

/// Single-line input bound to a text signal
#[component]
pub fn Input(
    #[prop(optional, into)] label: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// HTML input type; "text" when omitted
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] id: Option<String>,
    /// ID of a `<datalist>` offering suggestions
    #[prop(optional, into)]
    list: MaybeProp<String>,
) -> impl IntoView {
    let label = label.map(|text| {
        view! { <FieldLabel text=text for_id=id.clone() required=required /> }
    });

    view! {
        <div class="form__group">
            {label}
            <input
                id=id
                class="form__input"
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder
                readonly=readonly
                list=move || list.get()
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
