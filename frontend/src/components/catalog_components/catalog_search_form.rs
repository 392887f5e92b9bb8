//! Service selector, search box and search button of the catalog.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{go_icons::GoPlus, md_action_icons::MdSearch, md_editor_icons::MdModeEdit}};

use common::{
    catalog_service::{CatalogMode, ServiceDraft, ServiceMap},
    search_request::SearchOptions,
};
use crate::{
    components::catalog_components::catalog_panel::CatalogCallbacks,
    data_definitions::local_edit::LocalEdit,
};

#[component]
pub fn CatalogSearchForm(
    services: ServiceMap,
    selected_service: String,
    can_search: bool,
    search_options: SearchOptions,
    search: Callback<SearchOptions>,
    callbacks: CatalogCallbacks,
) -> Element {
    // text typed since the host last changed its search options
    let mut typed = use_signal(|| None::<LocalEdit<SearchOptions>>);
    let draft = LocalEdit::resolve(typed.read().as_ref(), &search_options);

    let edit_text = {
        let search_options = search_options.clone();
        Callback::new(move |text: Option<String>| {
            let current = LocalEdit::resolve(typed.read().as_ref(), &search_options);
            typed.set(Some(LocalEdit::new(search_options.clone(), SearchOptions { text, ..current })));
        })
    };
    // a new text always restarts from the first page
    let trigger_search = {
        let draft = draft.clone();
        Callback::new(move |_: ()| {
            if can_search {
                search.call(SearchOptions { start_position: None, ..draft.clone() });
            }
        })
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search.call(());
        }
    };
    let has_text = !draft.text().is_empty();
    let search_button_color = if can_search { "#1C212D" } else { "rgba(0,0,0,0.3)" };

    let start_editing = {
        let services = services.clone();
        let selected_service = selected_service.clone();
        Callback::new(move |existing: bool| {
            let draft = match (existing, services.get(&selected_service)) {
                (true, Some(service)) => ServiceDraft::from_service(&selected_service, service),
                _ => ServiceDraft::default(),
            };
            if let Some(on_change_new_service) = callbacks.on_change_new_service {
                on_change_new_service.call(draft);
            }
            if let Some(on_change_catalog_mode) = callbacks.on_change_catalog_mode {
                on_change_catalog_mode.call(CatalogMode::Edit);
            }
        })
    };

    rsx! {
        div {
            id: "x-catalog-search-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
            ",
            if !services.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                    select {
                        class: "x-catalog-service-select",
                        style: "flex: 1; height: 36px; font-size: 16px;",
                        onchange: move |event: Event<FormData>| {
                            if let Some(on_change_selected_service) = callbacks.on_change_selected_service {
                                on_change_selected_service.call(event.value());
                            }
                        },
                        for (id, service) in services.iter() {
                            option {
                                key: "{id}",
                                value: "{id}",
                                selected: *id == selected_service,
                                "{service.title}"
                            }
                        }
                    }
                    if callbacks.on_change_catalog_mode.is_some() {
                        button {
                            class: "x-catalog-icon-button",
                            title: "Edit service",
                            disabled: !can_search,
                            onclick: move |_| start_editing.call(true),
                            Icon { icon: MdModeEdit, style: "width: 20px; height: 20px;" }
                        }
                        button {
                            class: "x-catalog-icon-button",
                            title: "Add service",
                            onclick: move |_| start_editing.call(false),
                            Icon { icon: GoPlus, style: "width: 20px; height: 20px;" }
                        }
                    }
                }
            }
            div {
                id: "x-catalog-search-box",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 12px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 6px 14px;
                    height: 40px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                ",
                input {
                    r#type: "text",
                    placeholder: "Type text to search...",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 16px;
                    ",
                    value: "{draft.text()}",
                    oninput: move |event: Event<FormData>| edit_text.call(Some(event.value())),
                    onkeydown: search_onkeydown,
                }
                if has_text {
                    span {
                        class: "x-catalog-reset",
                        title: "Reset",
                        style: "cursor: pointer; color: #6B7280;",
                        onclick: move |_| {
                            edit_text.call(None);
                            if let Some(on_reset) = callbacks.on_reset {
                                on_reset.call(());
                            }
                        },
                        "✕"
                    }
                }
                button {
                    class: "x-catalog-search-button",
                    title: "Search",
                    disabled: !can_search,
                    style: "
                        border: none;
                        background: none;
                        cursor: pointer;
                    ",
                    onclick: move |_| trigger_search.call(()),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color};" }
                }
            }
        }
    }
}
