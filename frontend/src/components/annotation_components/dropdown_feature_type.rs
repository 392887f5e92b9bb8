//! Dropdown for choosing the geometry type of a new annotation.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, IconShape, icons::{
    md_action_icons::MdTimeline,
    md_communication_icons::MdLocationOn,
    md_editor_icons::{MdModeEdit, MdTextFields},
    md_image_icons::{MdCropSquare, MdPanoramaFishEye},
}};

use common::annotation_style::{
    AnnotationStylePresets, EndpointStyles, GeometryType, IdGenerator, LinestringEndpoints, StyleEntry,
    UuidGenerator, derive_feature_styles,
};
use crate::data_definitions::feature_type_titles::FeatureTypeTitles;

/// What a menu click reports, in the order the callbacks fire.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureTypeEvent {
    Click(String),
    AddText,
    SetStyle(Vec<StyleEntry>),
    StartDrawing,
}

pub fn selection_events(
    geometry_type: GeometryType,
    presets: &AnnotationStylePresets,
    endpoints: &dyn EndpointStyles,
    ids: &mut dyn IdGenerator,
) -> Vec<FeatureTypeEvent> {
    let selection = derive_feature_styles(geometry_type, presets, endpoints, ids);
    let mut events = vec![FeatureTypeEvent::Click(geometry_type.as_str().to_string())];
    if selection.add_text {
        events.push(FeatureTypeEvent::AddText);
    }
    events.push(FeatureTypeEvent::SetStyle(selection.styles));
    events.push(FeatureTypeEvent::StartDrawing);
    events
}

/// Menu state after a click on the dropdown button.
fn toggled_open(is_open: bool, disabled: bool) -> bool {
    !disabled && !is_open
}

#[component]
pub fn DropdownFeatureType(
    #[props(default)] titles: FeatureTypeTitles,
    #[props(default)] disabled: bool,
    id_dropdown: Option<String>,
    tooltip: Option<String>,
    presets: Option<AnnotationStylePresets>,
    on_click: Option<Callback<String>>,
    on_set_style: Option<Callback<Vec<StyleEntry>>>,
    on_start_drawing: Option<Callback<()>>,
    on_add_text: Option<Callback<()>>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let dropdown_id = use_hook(|| id_dropdown.clone().unwrap_or_else(|| UuidGenerator.next_id()));
    let presets = presets.unwrap_or_default();

    let select = Callback::new(move |geometry_type: GeometryType| {
        is_open.set(false);
        tracing::debug!("annotation feature type {} selected", geometry_type.as_str());
        for event in selection_events(geometry_type, &presets, &LinestringEndpoints, &mut UuidGenerator) {
            match event {
                FeatureTypeEvent::Click(name) => {
                    if let Some(on_click) = on_click {
                        on_click.call(name);
                    }
                }
                FeatureTypeEvent::AddText => {
                    if let Some(on_add_text) = on_add_text {
                        on_add_text.call(());
                    }
                }
                FeatureTypeEvent::SetStyle(styles) => {
                    if let Some(on_set_style) = on_set_style {
                        on_set_style.call(styles);
                    }
                }
                FeatureTypeEvent::StartDrawing => {
                    if let Some(on_start_drawing) = on_start_drawing {
                        on_start_drawing.call(());
                    }
                }
            }
        }
    });
    let button_color = if disabled { "rgba(255,255,255,0.5)" } else { "white" };
    let button_cursor = if disabled { "not-allowed" } else { "pointer" };

    rsx! {
        div {
            id: "{dropdown_id}",
            class: "x-dropdown-feature-type",
            style: "position: relative; display: inline-block;",
            if is_open() {
                // click-away layer
                div {
                    style: "
                        position: fixed;
                        top: 0px;
                        left: 0px;
                        z-index: 999;
                        width: 100vw;
                        height: 100vh;
                    ",
                    onclick: move |_| is_open.set(false),
                }
            }
            button {
                class: "square-button-md",
                title: tooltip.clone().unwrap_or_default(),
                disabled,
                style: "
                    width: 40px;
                    height: 40px;
                    border: none;
                    border-radius: 4px;
                    background-color: #078AA3;
                    color: {button_color};
                    cursor: {button_cursor};
                    position: relative;
                    z-index: 1000;
                ",
                onclick: move |_| {
                    let next = toggled_open(is_open(), disabled);
                    is_open.set(next);
                },
                Icon { icon: MdModeEdit, style: "width: 22px; height: 22px;" }
            }
            if is_open() {
                ul {
                    class: "x-dropdown-feature-type-menu",
                    style: "
                        position: absolute;
                        top: 44px;
                        left: 0px;
                        min-width: 180px;
                        margin: 0;
                        padding: 6px 0;
                        list-style: none;
                        background: white;
                        border: 1px solid rgba(0,0,0,0.3);
                        border-radius: 6px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                    ",
                    FeatureTypeMenuItem { geometry_type: GeometryType::Point, label: titles.title(GeometryType::Point).to_string(), icon: MdLocationOn, onselect: select }
                    FeatureTypeMenuItem { geometry_type: GeometryType::LineString, label: titles.title(GeometryType::LineString).to_string(), icon: MdTimeline, onselect: select }
                    FeatureTypeMenuItem { geometry_type: GeometryType::Polygon, label: titles.title(GeometryType::Polygon).to_string(), icon: MdCropSquare, onselect: select }
                    FeatureTypeMenuItem { geometry_type: GeometryType::Text, label: titles.title(GeometryType::Text).to_string(), icon: MdTextFields, onselect: select }
                    FeatureTypeMenuItem { geometry_type: GeometryType::Circle, label: titles.title(GeometryType::Circle).to_string(), icon: MdPanoramaFishEye, onselect: select }
                }
            }
        }
    }
}

#[component]
fn FeatureTypeMenuItem<I: IconShape + Clone + PartialEq + 'static>(
    geometry_type: GeometryType,
    label: String,
    icon: I,
    onselect: Callback<GeometryType>,
) -> Element {
    rsx! {
        li {
            class: "x-dropdown-feature-type-item",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                padding: 6px 14px;
                cursor: pointer;
                font-size: 15px;
            ",
            onclick: move |_| onselect.call(geometry_type),
            Icon { icon: icon, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.8);" }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    #[derive(Default)]
    struct CountingIds(u32);

    impl IdGenerator for CountingIds {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("id-{}", self.0)
        }
    }

    fn events(geometry_type: GeometryType) -> Vec<FeatureTypeEvent> {
        selection_events(geometry_type, &AnnotationStylePresets::default(), &LinestringEndpoints, &mut CountingIds::default())
    }

    fn kinds(events: &[FeatureTypeEvent]) -> Vec<&'static str> {
        events
            .iter()
            .map(|event| match event {
                FeatureTypeEvent::Click(_) => "click",
                FeatureTypeEvent::AddText => "add_text",
                FeatureTypeEvent::SetStyle(_) => "set_style",
                FeatureTypeEvent::StartDrawing => "start_drawing",
            })
            .collect()
    }

    #[test]
    fn text_click_fires_add_text_before_styles() {
        let events = events(GeometryType::Text);
        assert_eq!(kinds(&events), vec!["click", "add_text", "set_style", "start_drawing"]);
        assert_eq!(events[0], FeatureTypeEvent::Click("Text".to_string()));
    }

    #[test]
    fn other_types_skip_add_text() {
        for geometry_type in [GeometryType::Point, GeometryType::LineString, GeometryType::Polygon, GeometryType::Circle] {
            assert_eq!(kinds(&events(geometry_type)), vec!["click", "set_style", "start_drawing"]);
        }
    }

    #[test]
    fn circle_styles_reach_set_style() {
        let events = events(GeometryType::Circle);
        let FeatureTypeEvent::SetStyle(styles) = &events[1] else { panic!("expected styles, got {:?}", events[1]) };
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[1].str_attr("geometry"), Some("centerPoint"));
    }

    #[test]
    fn disabled_button_never_opens() {
        assert!(!toggled_open(false, true));
        assert!(!toggled_open(true, true));
        assert!(toggled_open(false, false));
        assert!(!toggled_open(true, false));
    }

    fn DisabledDropdown() -> Element {
        rsx! {
            DropdownFeatureType { disabled: true, id_dropdown: "annotations-dropdown".to_string(), tooltip: "Draw".to_string() }
        }
    }

    #[test]
    fn renders_closed_with_given_id() {
        let mut dom = VirtualDom::new(DisabledDropdown);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"id="annotations-dropdown""#));
        assert!(html.contains(r#"title="Draw""#));
        assert!(!html.contains("x-dropdown-feature-type-menu"));
    }
}
