//! Form for adding or editing a catalog service.

use dioxus::{logger::tracing, prelude::*};

use common::{
    catalog_service::{CatalogMode, FormatOption, ServiceDraft, ServiceMap, ServiceType},
    service_editor::FormatSelector,
};
use crate::{
    components::catalog_components::catalog_panel::CatalogCallbacks,
    data_definitions::local_edit::LocalEdit,
};

#[component]
pub fn CatalogServiceEditor(
    services: ServiceMap,
    draft: ServiceDraft,
    format_options: Vec<FormatOption>,
    callbacks: CatalogCallbacks,
) -> Element {
    // the host's draft wins as soon as it differs from the one we edited
    let mut edited = use_signal(|| None::<LocalEdit<ServiceDraft>>);
    let mut validation_error = use_signal(|| None::<String>);
    let current = LocalEdit::resolve(edited.read().as_ref(), &draft);

    let update = {
        let draft = draft.clone();
        Callback::new(move |next: ServiceDraft| {
            edited.set(Some(LocalEdit::new(draft.clone(), next.clone())));
            validation_error.set(None);
            if let Some(on_change_new_service) = callbacks.on_change_new_service {
                on_change_new_service.call(next);
            }
        })
    };
    let close = move || {
        if let Some(on_change_catalog_mode) = callbacks.on_change_catalog_mode {
            on_change_catalog_mode.call(CatalogMode::View);
        }
    };
    let save = {
        let current = current.clone();
        move |_: Event<MouseData>| match current.validate(&services) {
            Ok((id, descriptor)) => {
                tracing::info!("saving catalog service {id}");
                if let Some(on_add_service) = callbacks.on_add_service {
                    on_add_service.call((id, descriptor));
                }
                close();
            }
            Err(e) => validation_error.set(Some(e.to_string())),
        }
    };

    let format_selector = FormatSelector::bind(&current, &format_options);
    let mut type_choices = ServiceType::ALL.to_vec();
    if !type_choices.contains(&current.service_type) {
        type_choices.push(current.service_type.clone());
    }

    rsx! {
        form {
            id: "x-catalog-service-editor",
            style: "display: flex; flex-direction: column; gap: 10px;",
            onsubmit: move |event: Event<FormData>| event.prevent_default(),

            FormGroup {
                label: "Url",
                input {
                    r#type: "text",
                    value: "{current.url}",
                    oninput: {
                        let current = current.clone();
                        move |event: Event<FormData>| update.call(ServiceDraft { url: event.value(), ..current.clone() })
                    },
                }
            }
            FormGroup {
                label: "Type",
                select {
                    onchange: {
                        let current = current.clone();
                        move |event: Event<FormData>| {
                            update.call(ServiceDraft { service_type: ServiceType::from(event.value()), ..current.clone() })
                        }
                    },
                    for service_type in type_choices {
                        option {
                            key: "{service_type}",
                            value: "{service_type}",
                            selected: service_type == current.service_type,
                            "{service_type.as_str().to_uppercase()}"
                        }
                    }
                }
            }
            FormGroup {
                label: "Title",
                input {
                    r#type: "text",
                    value: "{current.title}",
                    oninput: {
                        let current = current.clone();
                        move |event: Event<FormData>| update.call(ServiceDraft { title: event.value(), ..current.clone() })
                    },
                }
            }
            label {
                style: "cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: current.show_advanced_settings,
                    onchange: {
                        let current = current.clone();
                        move |_| update.call(ServiceDraft { show_advanced_settings: !current.show_advanced_settings, ..current.clone() })
                    },
                }
                " Advanced settings"
            }
            if current.show_advanced_settings {
                AdvancedSettings { draft: current.clone(), format_selector, update }
            }
            if let Some(error) = validation_error() {
                p { class: "x-catalog-validation-error", style: "color: darkred; margin: 0;", "{error}" }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 8px; justify-content: flex-end;",
                button { class: "x-catalog-button", r#type: "button", onclick: save, "Save" }
                button { class: "x-catalog-button", r#type: "button", onclick: move |_| close(), "Cancel" }
            }
        }
    }
}

#[component]
fn AdvancedSettings(draft: ServiceDraft, #[props(!optional)] format_selector: Option<FormatSelector>, update: Callback<ServiceDraft>) -> Element {
    let template_text = draft.metadata_template.clone().unwrap_or_default();
    let toggle = {
        let draft = draft.clone();
        move |change: fn(&mut ServiceDraft)| {
            let mut next = draft.clone();
            change(&mut next);
            update.call(next);
        }
    };
    rsx! {
        if let Some(selector) = format_selector {
            FormGroup {
                label: "Format",
                select {
                    class: "x-catalog-format-select",
                    onchange: {
                        let draft = draft.clone();
                        move |event: Event<FormData>| {
                            update.call(ServiceDraft { format: Some(event.value()), ..draft.clone() });
                        }
                    },
                    // options may repeat a value, so they are keyed by position
                    for (index, format_option) in selector.options.iter().enumerate() {
                        option {
                            key: "{index}",
                            value: "{format_option.value}",
                            selected: selector.value.as_deref() == Some(format_option.value.as_str()),
                            "{format_option.label}"
                        }
                    }
                }
            }
        }
        label {
            style: "cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: draft.show_template,
                onchange: {
                    let toggle = toggle.clone();
                    move |_| toggle(|d| d.show_template = !d.show_template)
                },
            }
            " Show metadata template"
        }
        if draft.show_template {
            FormGroup {
                label: "Metadata template",
                textarea {
                    rows: "3",
                    placeholder: "<p>${{title}}: ${{description}}</p>",
                    value: "{template_text}",
                    oninput: {
                        let draft = draft.clone();
                        move |event: Event<FormData>| {
                            update.call(ServiceDraft { metadata_template: Some(event.value()), ..draft.clone() });
                        }
                    },
                }
            }
        }
        label {
            style: "cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: draft.hide_thumbnail,
                onchange: {
                    let toggle = toggle.clone();
                    move |_| toggle(|d| d.hide_thumbnail = !d.hide_thumbnail)
                },
            }
            " Hide thumbnails"
        }
        label {
            style: "cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: draft.autoload,
                onchange: move |_| toggle(|d| d.autoload = !d.autoload),
            }
            " Autoload"
        }
    }
}

#[component]
fn FormGroup(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "form-group",
            style: "display: flex; flex-direction: column; gap: 4px;",
            label { style: "font-size: 14px; font-weight: 500;", "{label}" }
            {children}
        }
    }
}
