//! Tab components for the artist profile page
//!
//! Each tab is a separate file; `ProfileField` is the shared read/edit row.

mod completion;
mod general;
mod physical;
mod role_fields;

pub use completion::CompletionTab;
pub use general::GeneralTab;
pub use physical::PhysicalTab;
pub use role_fields::RoleDetailsTab;

use crate::shared::components::ui::{Input, Textarea};
use leptos::prelude::*;

/// Blank values read as a dash
fn or_dash(text: String) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text
    }
}

/// Core field: plain text in read mode, an input while editing
#[component]
fn ProfileField(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_input: Callback<String>,
    editing: Signal<bool>,
    /// Text shown in read mode when it differs from the input value
    #[prop(optional)]
    display: Option<Signal<String>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let read_label = label.clone();
    let display = display.unwrap_or(value);
    let input_type = input_type.unwrap_or("text");
    let placeholder = placeholder
        .map(str::to_string)
        .unwrap_or_else(|| format!("Enter {}", label.to_lowercase()));

    view! {
        <Show
            when=move || editing.get()
            fallback=move || view! {
                <div class="form__group">
                    <span class="form__label">{read_label.clone()}</span>
                    <div class="form__value">{move || or_dash(display.get())}</div>
                </div>
            }
        >
            {
                let label = label.clone();
                let placeholder = placeholder.clone();
                if multiline {
                    view! {
                        <Textarea
                            label=label
                            value=value
                            on_input=on_input
                            placeholder=placeholder
                            required=required
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <Input
                            label=label
                            value=value
                            on_input=on_input
                            placeholder=placeholder
                            input_type=input_type
                            required=required
                        />
                    }
                    .into_any()
                }
            }
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash("  ".into()), "-");
        assert_eq!(or_dash("Pune".into()), "Pune");
    }
}
