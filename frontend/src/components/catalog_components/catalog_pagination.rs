//! Previous / next page controls for catalog results.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use common::{pagination::Pagination, search_request::SearchOptions};

#[component]
pub fn CatalogPagination(pagination: Pagination, search_options: SearchOptions, search: Callback<SearchOptions>) -> Element {
    let current_page = pagination.current_page;
    let go_to_page = {
        let search_options = search_options.clone();
        Callback::new(move |page: u64| {
            search.call(pagination.options_for_page(&search_options, page));
        })
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            // prev page
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !pagination.has_previous(),
                onclick: move |_| go_to_page.call(current_page.saturating_sub(1)),
            }
            // current page counter
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    padding: 4px 12px;
                ",
                if pagination.page_count > 0 { "{current_page + 1}" } else { "0" }
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{pagination.page_count}"
                }
            }
            // next page
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !pagination.has_next(),
                onclick: move |_| go_to_page.call(current_page + 1),
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: bool, onclick: Callback<()>) -> Element {
    let btn_color = if disabled { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" };
    let btn_cursor = if disabled { "not-allowed" } else { "pointer" };
    rsx! {
        button {
            class: "x-catalog-page-button",
            title: "{label}",
            disabled,
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !disabled {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
