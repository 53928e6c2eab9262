use leptos::prelude::*;

/// Pill coloured by a band colour name ("green", "yellow", "orange", "red")
#[component]
pub fn Badge(#[prop(into)] color: Signal<&'static str>, children: Children) -> impl IntoView {
    let modifier = move || match color.get() {
        "green" => "success",
        "yellow" => "warning",
        "orange" => "caution",
        "red" => "error",
        _ => "neutral",
    };

    view! {
        <span class=move || format!("badge badge--{}", modifier())>{children()}</span>
    }
}
