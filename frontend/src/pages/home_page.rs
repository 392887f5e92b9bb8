use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_editor_icons::MdModeEdit;
use dioxus_free_icons::{Icon, IconShape};

use common::search_request::SearchOptions;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Geoportal - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            div {
                style: "color: #0F172A; font-size: 40px; font-weight: 500;",
                "Geoportal map tools"
            }
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                ",
                ToolCard {
                    to: Route::catalog_page(None, SearchOptions::default()),
                    icon: MdSearch,
                    title: "Catalog",
                    text: "Search CSW, WMS and WMTS services for layers to add to the map.",
                }
                ToolCard {
                    to: Route::AnnotationsPage {},
                    icon: MdModeEdit,
                    title: "Annotations",
                    text: "Pick a geometry type and start drawing an annotation with its default style.",
                }
            }
        }
    }
}

#[component]
fn ToolCard<I: IconShape + Clone + PartialEq + 'static>(to: Route, icon: I, title: String, text: String) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 360px;
                    min-height: 180px;
                    border-radius: 22px;
                    padding: 22px;
                    background: linear-gradient(135deg, #1C212D 0%, #078AA3 100%);
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                div {
                    style: "display:flex; align-items:center; gap: 10px; font-size: 26px; font-weight: 600;",
                    Icon { icon: icon, style: "width: 28px; height: 28px;" }
                    "{title}"
                }
                div { style: "font-size: 17px; line-height: 1.5; opacity: 0.9;", "{text}" }
            }
        }
    }
}
