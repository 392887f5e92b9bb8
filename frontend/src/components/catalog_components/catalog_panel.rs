//! Catalog panel: search form and records in view mode, service editor in edit mode.

use dioxus::{logger::tracing, prelude::*};

use common::{
    catalog_record::{CatalogResult, RecordResult},
    catalog_service::{CatalogMode, FormatOption, ServiceDescriptor, ServiceDraft, ServiceMap},
    record_view::RecordRenderPolicy,
    search_request::{SearchOptions, SearchRequest, derive_search_request},
};
use crate::components::catalog_components::{
    catalog_record_list::CatalogRecordList, catalog_search_form::CatalogSearchForm,
    catalog_service_editor::CatalogServiceEditor,
};

/// Callbacks the catalog hands its derived data to. Every one is optional.
#[derive(Clone, Copy, PartialEq)]
pub struct CatalogCallbacks {
    pub on_search: Option<Callback<SearchRequest>>,
    pub on_reset: Option<Callback<()>>,
    pub on_change_selected_service: Option<Callback<String>>,
    pub on_change_catalog_mode: Option<Callback<CatalogMode>>,
    pub on_change_new_service: Option<Callback<ServiceDraft>>,
    pub on_add_service: Option<Callback<(String, ServiceDescriptor)>>,
    pub on_record_add: Option<Callback<RecordResult>>,
}

/// The request a search activation hands to `on_search`, if the selection allows one.
fn submitted_request(selected_service: &str, services: &ServiceMap, options: &SearchOptions) -> Option<SearchRequest> {
    match derive_search_request(selected_service, services, options) {
        Ok(request) => {
            tracing::info!("catalog search on {} ({}) from {}", request.url, request.format, request.start_position);
            Some(request)
        }
        Err(e) => {
            tracing::warn!("catalog search not submitted: {e}");
            None
        }
    }
}

#[component]
pub fn Catalog(
    #[props(default)] services: ServiceMap,
    #[props(default)] selected_service: String,
    #[props(default)] search_options: SearchOptions,
    result: Option<CatalogResult>,
    #[props(default)] records: Vec<RecordResult>,
    #[props(default)] loading: bool,
    #[props(default)] mode: CatalogMode,
    new_service: Option<ServiceDraft>,
    #[props(default)] format_options: Vec<FormatOption>,
    on_search: Option<Callback<SearchRequest>>,
    on_reset: Option<Callback<()>>,
    on_change_selected_service: Option<Callback<String>>,
    on_change_catalog_mode: Option<Callback<CatalogMode>>,
    on_change_new_service: Option<Callback<ServiceDraft>>,
    on_add_service: Option<Callback<(String, ServiceDescriptor)>>,
    on_record_add: Option<Callback<RecordResult>>,
) -> Element {
    let callbacks = CatalogCallbacks {
        on_search,
        on_reset,
        on_change_selected_service,
        on_change_catalog_mode,
        on_change_new_service,
        on_add_service,
        on_record_add,
    };

    let active_service = services.get(&selected_service).cloned();
    let can_search = active_service.is_some();
    let policy = RecordRenderPolicy::for_service(active_service.as_ref());

    let search = {
        let services = services.clone();
        let selected_service = selected_service.clone();
        Callback::new(move |options: SearchOptions| {
            if let (Some(request), Some(on_search)) = (submitted_request(&selected_service, &services, &options), on_search) {
                on_search.call(request);
            }
        })
    };

    rsx! {
        div {
            class: "ms2-border-layout-body catalog",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 12px;
                box-sizing: border-box;
                width: 100%;
            ",
            match mode {
                CatalogMode::View => rsx! {
                    CatalogSearchForm {
                        services: services.clone(),
                        selected_service: selected_service.clone(),
                        can_search,
                        search_options: search_options.clone(),
                        search,
                        callbacks,
                    }
                    CatalogRecordList {
                        policy,
                        records,
                        loading,
                        result,
                        search_options: search_options.clone(),
                        search,
                        on_record_add,
                    }
                },
                CatalogMode::Edit => rsx! {
                    CatalogServiceEditor {
                        services: services.clone(),
                        draft: new_service.clone().unwrap_or_default(),
                        format_options,
                        callbacks,
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};

    use common::catalog_service::ServiceType;
    use super::*;

    fn first_render(dom: &mut VirtualDom) -> String {
        dom.rebuild_in_place();
        dioxus_ssr::render(dom)
    }

    fn rerender(dom: &mut VirtualDom) -> String {
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(dom)
    }

    fn csw_services(show_template: bool, hide_thumbnail: bool) -> ServiceMap {
        let mut service = ServiceDescriptor::new(ServiceType::Csw, "url", "csw");
        service.metadata_template = Some("<p>${title} and ${description}</p>".to_string());
        service.show_template = show_template;
        service.hide_thumbnail = hide_thumbnail;
        let mut services = ServiceMap::new();
        services.insert("csw".to_string(), service);
        services
    }

    fn thumbnail_record() -> RecordResult {
        let mut record = RecordResult::new("title", "description");
        record.thumbnail = Some("thumb.png".to_string());
        record
    }

    fn DefaultCatalog() -> Element {
        rsx! { Catalog {} }
    }

    fn TemplatedCatalog() -> Element {
        rsx! {
            Catalog {
                services: csw_services(true, false),
                selected_service: "csw".to_string(),
                records: vec![thumbnail_record()],
            }
        }
    }

    fn HiddenThumbnailCatalog() -> Element {
        rsx! {
            Catalog {
                services: csw_services(false, true),
                selected_service: "csw".to_string(),
                records: vec![thumbnail_record()],
            }
        }
    }

    fn TextHost(text: Rc<RefCell<String>>) -> Element {
        let search_options = SearchOptions::default().with_text(text.borrow().clone());
        rsx! { Catalog { services: csw_services(false, false), selected_service: "csw".to_string(), search_options } }
    }

    fn EditorHost(format: Rc<RefCell<String>>) -> Element {
        let draft = ServiceDraft {
            url: "url".to_string(),
            title: "csw".to_string(),
            show_advanced_settings: true,
            format: Some(format.borrow().clone()),
            ..Default::default()
        };
        rsx! {
            Catalog {
                mode: CatalogMode::Edit,
                new_service: draft,
                format_options: vec![
                    FormatOption::new("image/png8", "image/png8"),
                    FormatOption::new("image/jpeg", "image/jpeg"),
                ],
            }
        }
    }

    fn DuplicateFormatsHost(format: Rc<RefCell<String>>) -> Element {
        let draft = ServiceDraft {
            url: "url".to_string(),
            title: "wms".to_string(),
            show_advanced_settings: true,
            format: Some(format.borrow().clone()),
            ..Default::default()
        };
        rsx! {
            Catalog {
                mode: CatalogMode::Edit,
                new_service: draft,
                format_options: vec![
                    FormatOption::new("JPEG", "image/jpeg"),
                    FormatOption::new("JPEG again", "image/jpeg"),
                    FormatOption::new("PNG", "image/png"),
                ],
            }
        }
    }

    #[test]
    fn default_construction_has_no_optional_affordances() {
        let html = first_render(&mut VirtualDom::new(DefaultCatalog));
        assert!(html.contains("ms2-border-layout-body catalog"));
        assert!(!html.contains("glyphicon-chevron-left"));
        assert!(!html.contains("mapstore-side-preview"));
        assert!(!html.contains("x-catalog-format-select"));
        assert!(!html.contains("records found"));
    }

    #[test]
    fn shown_template_adds_expand_toggle_per_record() {
        let html = first_render(&mut VirtualDom::new(TemplatedCatalog));
        assert!(html.contains("glyphicon-chevron-left"));
        assert!(html.contains("mapstore-side-preview"));
    }

    #[test]
    fn hidden_thumbnails_render_no_preview() {
        let html = first_render(&mut VirtualDom::new(HiddenThumbnailCatalog));
        assert!(!html.contains("mapstore-side-preview"));
        assert!(!html.contains("glyphicon-chevron-left"));
    }

    #[test]
    fn search_box_follows_host_search_options() {
        let text = Rc::new(RefCell::new("first".to_string()));
        let mut dom = VirtualDom::new_with_props(TextHost, text.clone());
        assert!(first_render(&mut dom).contains(r#"value="first""#));

        *text.borrow_mut() = "second".to_string();
        let html = rerender(&mut dom);
        assert!(html.contains(r#"value="second""#));
        assert!(!html.contains(r#"value="first""#));
    }

    #[test]
    fn format_select_follows_new_service_format() {
        let format = Rc::new(RefCell::new("image/png8".to_string()));
        let mut dom = VirtualDom::new_with_props(EditorHost, format.clone());
        assert!(first_render(&mut dom).contains(r#"<option value="image/png8" selected=true>"#));

        *format.borrow_mut() = "image/jpeg".to_string();
        let html = rerender(&mut dom);
        assert!(html.contains(r#"<option value="image/jpeg" selected=true>"#));
        assert!(!html.contains(r#"<option value="image/png8" selected=true>"#));
    }

    #[test]
    fn repeated_format_values_survive_a_rerender() {
        let format = Rc::new(RefCell::new("image/png".to_string()));
        let mut dom = VirtualDom::new_with_props(DuplicateFormatsHost, format.clone());
        let html = first_render(&mut dom);
        assert!(html.contains("JPEG again"));
        assert!(html.contains(r#"<option value="image/png" selected=true>"#));

        *format.borrow_mut() = "image/jpeg".to_string();
        let html = rerender(&mut dom);
        assert_eq!(html.matches(r#"<option value="image/jpeg" selected=true>"#).count(), 2);
        assert!(html.contains("JPEG again"));
        assert!(!html.contains(r#"<option value="image/png" selected=true>"#));
    }

    #[test]
    fn reset_control_follows_the_search_text() {
        let text = Rc::new(RefCell::new("rivers".to_string()));
        let mut dom = VirtualDom::new_with_props(TextHost, text.clone());
        assert!(first_render(&mut dom).contains("x-catalog-reset"));

        *text.borrow_mut() = String::new();
        assert!(!rerender(&mut dom).contains("x-catalog-reset"));
    }

    #[test]
    fn search_activation_submits_one_request_for_a_known_service() {
        let services = csw_services(false, false);
        let request = submitted_request("csw", &services, &SearchOptions::default().with_text("rivers"));
        assert_eq!(request.map(|r| (r.format, r.text)), Some(("csw".to_string(), "rivers".to_string())));
        assert_eq!(submitted_request("", &services, &SearchOptions::default()), None);
        assert_eq!(submitted_request("missing", &services, &SearchOptions::default()), None);
    }
}
