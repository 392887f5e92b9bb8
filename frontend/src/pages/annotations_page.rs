//! Annotations page: hosts the geometry type dropdown and shows what it emits.

use dioxus::{logger::tracing, prelude::*};

use common::annotation_style::{AnnotationStylePresets, StyleEntry};
use crate::{
    components::{annotation_components::dropdown_feature_type::DropdownFeatureType, error_boundary::ComponentErrorDisplay},
    config::load_catalog_config,
    data_definitions::feature_type_titles::FeatureTypeTitles,
};

#[component]
pub fn AnnotationsPage() -> Element {
    let presets = use_hook(|| {
        load_catalog_config()
            .map(|config| config.annotation_presets())
            .map_err(|e| format!("{e:#}"))
    });
    let presets = match presets {
        Ok(presets) => presets,
        Err(error_txt) => return rsx! { ComponentErrorDisplay { error_txt } },
    };

    rsx! {
        Title { "Geoportal - Annotations" }
        AnnotationsDrawingPanel { presets }
    }
}

#[component]
fn AnnotationsDrawingPanel(presets: AnnotationStylePresets) -> Element {
    let mut drawing_type = use_signal(|| None::<String>);
    let mut styles = use_signal(Vec::<StyleEntry>::new);
    let mut text_mode = use_signal(|| false);
    let mut drawing = use_signal(|| false);

    let on_click = Callback::new(move |name: String| {
        tracing::info!("drawing type changed to {name}");
        text_mode.set(false);
        drawing_type.set(Some(name));
    });
    let on_add_text = Callback::new(move |_: ()| text_mode.set(true));
    let on_set_style = Callback::new(move |entries: Vec<StyleEntry>| {
        tracing::debug!("{} style entries for the new feature", entries.len());
        styles.set(entries);
    });
    let on_start_drawing = Callback::new(move |_: ()| drawing.set(true));

    let styles_json = serde_json::to_string_pretty(&*styles.read()).unwrap_or_default();

    rsx! {
        div {
            id: "x-annotations-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 16px;
                box-sizing: border-box;
                width: 100%;
                height: 100%;
                overflow-y: auto;
                background-color: #ECEEF2;
            ",
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
                DropdownFeatureType {
                    titles: FeatureTypeTitles::default(),
                    tooltip: "Draw a new annotation feature".to_string(),
                    presets,
                    on_click,
                    on_set_style,
                    on_start_drawing,
                    on_add_text,
                }
                span {
                    style: "font-size: 16px; color: rgb(75, 87, 112);",
                    match drawing_type() {
                        Some(name) if drawing() => rsx! { "Drawing: {name}" },
                        _ => rsx! { "Pick a geometry type to start drawing" },
                    }
                }
                if text_mode() {
                    span {
                        class: "x-annotations-text-mode",
                        style: "padding: 2px 8px; border-radius: 4px; background: #078AA3; color: white; font-size: 13px;",
                        "text mode"
                    }
                }
            }
            h1 { style: "font-size: 20px; font-weight: 400;", "Feature styles" }
            pre {
                style: "background: white; padding: 10px; border-radius: 5px; text-wrap: auto;",
                "{styles_json}"
            }
        }
    }
}
