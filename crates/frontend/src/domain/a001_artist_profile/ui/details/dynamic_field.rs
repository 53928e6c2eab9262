//! Schema-driven rendering of the role-specific fields

use super::view_model::ArtistProfileVm;
use crate::shared::components::ui::{Checkbox, FieldLabel, Input, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_artist_profile::layout::{
    EditorKind, FieldControl, FieldEdit, LayoutSource, ReadDisplay,
};
use contracts::shared::metadata::FieldDescriptor;
use leptos::prelude::*;

/// Renders every field of the resolved layout, in layout order
#[component]
pub fn DynamicFieldsPanel(vm: ArtistProfileVm) -> impl IntoView {
    let editor = vm.editor;
    // Memos keep the inputs mounted while the draft changes
    let layout = Memo::new(move |_| {
        editor.with(|e| e.layout().map(|l| (l.source, l.fields)))
    });
    let editing = Memo::new(move |_| editor.with(|e| e.is_editing()));

    view! {
        {move || {
            let Some((source, fields)) = layout.get() else {
                return ().into_any();
            };
            if fields.is_empty() {
                return view! { <div class="details-section"></div> }.into_any();
            }
            let editing = editing.get();
            let hint = match source {
                LayoutSource::Legacy(category) => Some(format!("{} details", category.display_name())),
                LayoutSource::Schema | LayoutSource::Empty => None,
            };
            view! {
                <div class="details-section">
                    {hint.map(|h| view! { <h4 class="details-section__title">{h}</h4> })}
                    <div class="details-grid--2col">
                        {fields
                            .into_iter()
                            .map(|descriptor| view! {
                                <DynamicFieldInput vm=vm descriptor=descriptor editing=editing />
                            })
                            .collect_view()}
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}

/// One dynamic field in edit or read mode
#[component]
pub fn DynamicFieldInput(
    vm: ArtistProfileVm,
    descriptor: FieldDescriptor,
    editing: bool,
) -> impl IntoView {
    let editor = vm.editor;
    let name = descriptor.name.clone();
    let control = Memo::new(move |_| {
        editor.with(|e| {
            let value = e
                .current()
                .and_then(|p| p.dynamic_fields.get(&descriptor.name));
            FieldControl::build(&descriptor, value)
        })
    });

    let FieldControl {
        label,
        required,
        placeholder,
        options,
        editor: kind,
        ..
    } = control.get_untracked();
    let input_id = format!("dyn-{}", name);

    if !editing {
        return view! {
            <div class="form__group">
                <span class="form__label">{label}</span>
                <div class="form__value">{move || read_view(control.get().read)}</div>
            </div>
        }
        .into_any();
    }

    let on_text = {
        let name = name.clone();
        Callback::new(move |text: String| vm.set_dynamic(&name, FieldEdit::Text(text)))
    };
    let edit_text = Signal::derive(move || control.get().edit_text);

    match kind {
        EditorKind::SingleLine | EditorKind::Numeric | EditorKind::UrlInput => {
            let list_id = format!("{}-options", input_id);
            let has_options = !options.is_empty();
            view! {
                <div>
                    <Input
                        label=label
                        value=edit_text
                        on_input=on_text
                        placeholder=placeholder
                        input_type=kind.input_type()
                        required=required
                        id=input_id
                        list=has_options.then(|| list_id.clone())
                    />
                    {has_options.then(|| view! {
                        <datalist id=list_id>
                            {options
                                .into_iter()
                                .map(|option| view! { <option value=option></option> })
                                .collect_view()}
                        </datalist>
                    })}
                </div>
            }
            .into_any()
        }
        EditorKind::MultiLine => view! {
            <div style="grid-column: 1 / -1;">
                <Textarea
                    label=label
                    value=edit_text
                    on_input=on_text
                    placeholder=placeholder
                    required=required
                    id=input_id
                />
            </div>
        }
        .into_any(),
        EditorKind::Toggle => {
            let name = name.clone();
            view! {
                <Checkbox
                    label=label
                    checked=Signal::derive(move || control.get().checked)
                    on_change=Callback::new(move |checked: bool| {
                        vm.set_dynamic(&name, FieldEdit::Checked(checked))
                    })
                    required=required
                    id=input_id
                />
            }
            .into_any()
        }
        EditorKind::FileSlot => {
            let uploading = {
                let name = name.clone();
                move || editor.with(|e| e.is_uploading_field(&name))
            };
            let is_saving = vm.is_saving();
            let on_change = move |ev: leptos::ev::Event| {
                let input: web_sys::HtmlInputElement = event_target(&ev);
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    vm.on_file_chosen(name.clone(), file);
                }
            };
            view! {
                <div class="form__group">
                    <FieldLabel text=label for_id=input_id.clone() required=required />
                    <Input value=Signal::derive(move || control.get().read.text()) readonly=true />
                    <div class="form__file-row">
                        <span class="form__file-icon">{icon("upload")}</span>
                        <input
                            id=input_id
                            type="file"
                            class="form__file"
                            disabled=move || is_saving.get()
                            on:change=on_change
                        />
                        {move || uploading().then(|| view! {
                            <span class="form__hint">"Uploading..."</span>
                        })}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

fn read_view(read: ReadDisplay) -> AnyView {
    let text = read.text();
    match read {
        ReadDisplay::Link(url) => external_link(url),
        ReadDisplay::File(Some(reference)) if is_url(&reference) => external_link(reference),
        ReadDisplay::Dash | ReadDisplay::File(None) => {
            view! { <span class="text-muted">{text}</span> }.into_any()
        }
        _ => view! { <span>{text}</span> }.into_any(),
    }
}

fn external_link(url: String) -> AnyView {
    let href = url.clone();
    view! {
        <a href=href target="_blank" rel="noopener noreferrer">
            {url}
            " "
            {icon("external-link")}
        </a>
    }
    .into_any()
}

fn is_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}
