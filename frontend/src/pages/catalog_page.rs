//! Catalog page: owns the catalog props and receives its callbacks.

use dioxus::{logger::tracing, prelude::*};

use common::{
    catalog_config::CatalogConfig,
    catalog_record::RecordResult,
    catalog_service::{CatalogMode, ServiceDescriptor, ServiceDraft},
    search_request::{SearchOptions, SearchRequest},
};
use crate::{
    components::{catalog_components::catalog_panel::Catalog, error_boundary::ComponentErrorDisplay},
    config::load_catalog_config,
    data_definitions::url_param::UrlParam,
    routes::Route,
};

#[component]
pub fn CatalogPage(selected_service: UrlParam<Option<String>>, search_options: UrlParam<SearchOptions>) -> Element {
    let config = use_hook(|| load_catalog_config().map_err(|e| format!("{e:#}")));
    let config = match config {
        Ok(config) => config,
        Err(error_txt) => return rsx! { ComponentErrorDisplay { error_txt } },
    };

    rsx! {
        Title { "Geoportal - Catalog" }
        CatalogHost {
            config,
            selected_service: selected_service.0.clone(),
            search_options: search_options.0.clone(),
        }
    }
}

#[component]
fn CatalogHost(config: CatalogConfig, #[props(!optional)] selected_service: Option<String>, search_options: SearchOptions) -> Element {
    let mut services = use_signal(|| config.services.clone());
    let mut mode = use_signal(CatalogMode::default);
    let mut new_service = use_signal(ServiceDraft::default);
    let mut last_request = use_signal(|| None::<SearchRequest>);
    let mut added_records = use_signal(Vec::<RecordResult>::new);

    let selected_service = selected_service.or_else(|| config.default_service());
    let search_options = if search_options == SearchOptions::default() { config.search_options.clone() } else { search_options };

    let on_search = {
        let selected_service = selected_service.clone();
        Callback::new(move |request: SearchRequest| {
            tracing::info!("catalog search requested: {:?}", request);
            last_request.set(Some(request.clone()));
            let options = SearchOptions {
                text: Some(request.text).filter(|t| !t.is_empty()),
                start_position: Some(request.start_position),
                max_records: Some(request.max_records),
            };
            navigator().push(Route::catalog_page(selected_service.clone(), options));
        })
    };
    let on_change_selected_service = Callback::new(move |id: String| {
        navigator().push(Route::catalog_page(Some(id), SearchOptions::default()));
    });
    let on_reset = Callback::new(move |_: ()| last_request.set(None));
    let on_change_catalog_mode = Callback::new(move |next: CatalogMode| mode.set(next));
    let on_change_new_service = Callback::new(move |draft: ServiceDraft| new_service.set(draft));
    let on_record_add = Callback::new(move |record: RecordResult| added_records.write().push(record));
    let on_add_service = Callback::new(move |(id, descriptor): (String, ServiceDescriptor)| {
        services.write().insert(id.clone(), descriptor);
        navigator().push(Route::catalog_page(Some(id), SearchOptions::default()));
    });

    rsx! {
        div {
            id: "x-catalog-page",
            style: "
                display: flex;
                flex-direction: row;
                gap: 16px;
                padding: 16px;
                box-sizing: border-box;
                width: 100%;
                height: 100%;
                background-color: #ECEEF2;
            ",
            div {
                style: "width: 480px; max-width: 60%; background: white; border-radius: 8px; overflow-y: auto;",
                Catalog {
                    services: services(),
                    selected_service: selected_service.clone().unwrap_or_default(),
                    search_options,
                    mode: mode(),
                    new_service: new_service(),
                    format_options: config.format_options.clone(),
                    on_search,
                    on_reset,
                    on_change_selected_service,
                    on_change_catalog_mode,
                    on_change_new_service,
                    on_add_service,
                    on_record_add,
                }
            }
            div {
                style: "flex: 1; display: flex; flex-direction: column; gap: 12px; font-size: 14px;",
                h1 { style: "font-size: 20px; font-weight: 400;", "Last search request" }
                match last_request() {
                    Some(request) => rsx! {
                        pre {
                            style: "background: white; padding: 10px; border-radius: 5px; text-wrap: auto;",
                            "{serde_json::to_string_pretty(&request).unwrap_or_default()}"
                        }
                    },
                    None => rsx! { p { "No search submitted yet." } },
                }
                h1 { style: "font-size: 20px; font-weight: 400;", "Layers added to the map" }
                ul {
                    for (index, record) in added_records().into_iter().enumerate() {
                        li { key: "{index}", "{record.title}" }
                    }
                }
            }
        }
    }
}
