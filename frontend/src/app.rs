//! Geoportal shell: page metadata, the stylesheet and the routed tools.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const GEOPORTAL_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Geoportal" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "description", content: "Catalog search and annotation drawing tools for the map viewer" }
        document::Stylesheet { href: GEOPORTAL_CSS }
        GlobalErrorBoundary {
            boundary_name: "Geoportal".to_string(),
            Router::<Route> {}
        }
    }
}
