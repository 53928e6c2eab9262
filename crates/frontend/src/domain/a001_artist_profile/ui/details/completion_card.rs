//! Completion progress with the "what's missing" checklist

use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a001_artist_profile::completion::CompletionScore;
use leptos::prelude::*;

#[component]
pub fn CompletionCard(#[prop(into)] score: Signal<CompletionScore>) -> impl IntoView {
    let percentage = move || score.with(|s| s.percentage);
    let band = move || score.with(|s| s.band());

    view! {
        <div class="details-section completion-card">
            <div class="completion-card__header">
                <h4 class="details-section__title">"Profile Completion"</h4>
                <Badge color=Signal::derive(move || band().color())>
                    {move || band().label()}
                </Badge>
            </div>

            <div class="completion-card__summary">
                <span class="completion-card__percentage">{move || format!("{}%", percentage())}</span>
                <span class="completion-card__count">
                    {move || score.with(|s| format!("{} of {} fields filled", s.filled, s.total))}
                </span>
            </div>

            <div class="progress">
                <div
                    class=move || format!("progress__bar progress__bar--{}", band().color())
                    style=move || format!("width: {}%;", percentage())
                ></div>
            </div>

            {move || {
                let required = score.with(|s| {
                    s.missing_required().into_iter().map(str::to_string).collect::<Vec<_>>()
                });
                (!required.is_empty()).then(|| view! {
                    <p class="completion-card__required">
                        "Required: " {required.join(", ")}
                    </p>
                })
            }}

            <ul class="completion-card__checklist">
                {move || score.with(|s| {
                    s.items
                        .iter()
                        .map(|item| {
                            let class = if item.filled {
                                "checklist__item checklist__item--done"
                            } else {
                                "checklist__item checklist__item--missing"
                            };
                            let marker = if item.filled { icon("check") } else { icon("x") };
                            view! {
                                <li class=class>
                                    <span class="checklist__marker">{marker}</span>
                                    <span class="checklist__label">
                                        {item.label.clone()}
                                        {item.required.then(|| view! { <span class="form__required">" *"</span> })}
                                    </span>
                                    <span class="checklist__value">{item.display_value.clone()}</span>
                                </li>
                            }
                        })
                        .collect_view()
                })}
            </ul>
        </div>
    }
}
