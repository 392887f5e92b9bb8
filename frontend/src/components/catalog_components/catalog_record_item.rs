//! Catalog record card.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{go_icons::GoPlus, md_navigation_icons::{MdChevronLeft, MdExpandMore}}};

use common::{catalog_record::RecordResult, record_view::RecordView};

#[component]
pub fn CatalogRecordItem(view: RecordView, record: RecordResult, #[props(!optional)] on_record_add: Option<Callback<RecordResult>>) -> Element {
    let mut expanded = use_signal(|| false);
    let RecordView { title, description, templated_html, show_expand_toggle, preview } = view;

    rsx! {
        div {
            class: "x-catalog-record",
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                background: white;
                border: 1px solid #AAAAAA55;
                border-radius: 8px;
                padding: 12px 16px;
                box-sizing: border-box;
            ",
            if let Some(preview) = preview {
                img {
                    class: "mapstore-side-preview",
                    src: "{preview}",
                    alt: "{title}",
                    style: "width: 96px; height: 96px; object-fit: cover; border-radius: 4px; flex-shrink: 0;",
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 6px; flex: 1; min-width: 0;",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                    span {
                        style: "
                            font-size: 18px;
                            font-weight: 400;
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                            flex: 1;
                        ",
                        "{title}"
                    }
                    if show_expand_toggle {
                        button {
                            class: "x-catalog-icon-button x-catalog-expand-toggle",
                            title: if expanded() { "Hide metadata" } else { "Show metadata" },
                            onclick: move |_| expanded.toggle(),
                            if expanded() {
                                Icon { icon: MdExpandMore, style: "width: 20px; height: 20px;" }
                            } else {
                                Icon { icon: MdChevronLeft, class: "glyphicon-chevron-left", style: "width: 20px; height: 20px;" }
                            }
                        }
                    }
                    if let Some(on_record_add) = on_record_add {
                        button {
                            class: "x-catalog-icon-button",
                            title: "Add to map",
                            onclick: move |_| on_record_add.call(record.clone()),
                            Icon { icon: GoPlus, style: "width: 20px; height: 20px;" }
                        }
                    }
                }
                match (templated_html, expanded()) {
                    (Some(html), true) => rsx! {
                        div { class: "x-catalog-metadata-template", dangerous_inner_html: "{html}" }
                    },
                    _ => rsx! {
                        p {
                            style: "font-size: 14px; color: rgba(0,0,0,0.7); margin: 0;",
                            "{description}"
                        }
                    },
                }
            }
        }
    }
}
