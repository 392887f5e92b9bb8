//! Error boundaries around the routed pages and the catalog record list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdRefresh};

/// Wraps a whole page. A failure offers the way back to the tool list.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_text = format!("{err:#?}");
                rsx! {
                    ErrorCard {
                        heading: "This map tool stopped working",
                        error_text,
                        span { style: "color: rgba(0,0,0,0.6); font-size: 13px;", "in {boundary_name}" }
                        a {
                            href: "/",
                            style: "color: #078AA3; font-size: 15px;",
                            "Back to the map tools"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing record renderer from taking the whole catalog panel down.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_text = err.error().map(|e| format!("{:#?}", e.0)).unwrap_or_else(|| "no details".to_string());
                rsx! {
                    ErrorCard {
                        heading: "These catalog records could not be shown",
                        error_text,
                        button {
                            class: "x-catalog-button",
                            title: "Render the records again",
                            onclick: move |_| err.clear_errors(),
                            Icon { icon: MdRefresh, style: "width: 16px; height: 16px; vertical-align: middle;" }
                            " Retry"
                        }
                    }
                }
            },
            div { width: "100%", {children} }
        }
    }
}

/// Shown in place of a page whose configuration failed to load.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorCard {
            heading: "The catalog configuration could not be loaded",
            error_text: error_txt(),
            {children}
        }
    }
}

#[component]
fn ErrorCard(heading: String, error_text: String, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                margin: 12px;
                padding: 12px 16px;
                background: white;
                border-left: 4px solid #C62828;
                border-radius: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
            ",
            span { style: "font-size: 17px; font-weight: 500; color: #C62828;", "{heading}" }
            details {
                summary { style: "cursor: pointer; font-size: 13px;", "Details" }
                pre {
                    style: "font-size: 12px; text-wrap: auto; max-height: 240px; overflow-y: auto; margin: 6px 0 0 0;",
                    "{error_text}"
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    fn BrokenConfig() -> Element {
        rsx! { ComponentErrorDisplay { error_txt: "invalid catalog configuration: expected value".to_string() } }
    }

    #[test]
    fn config_error_shows_heading_and_details() {
        let mut dom = VirtualDom::new(BrokenConfig);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("The catalog configuration could not be loaded"));
        assert!(html.contains("invalid catalog configuration: expected value"));
    }
}
