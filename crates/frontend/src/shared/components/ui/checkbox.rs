use super::FieldLabel;
use leptos::prelude::*;

/// Toggle for yes/no fields; the label sits to the right of the box
#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let for_id = id.clone();

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <FieldLabel text=label for_id=for_id required=required inline=true />
        </div>
    }
}
