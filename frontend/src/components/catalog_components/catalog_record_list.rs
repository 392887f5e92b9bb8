//! Result summary, pagination and record cards of the catalog.

use dioxus::prelude::*;

use common::{
    catalog_record::{CatalogResult, RecordResult},
    pagination::Pagination,
    record_view::{RecordRenderPolicy, record_key},
    search_request::SearchOptions,
};
use crate::components::{
    catalog_components::{catalog_pagination::CatalogPagination, catalog_record_item::CatalogRecordItem},
    error_boundary::ComponentErrorBoundary,
    loading_indicator::LoadingIndicator,
};

#[component]
pub fn CatalogRecordList(
    policy: RecordRenderPolicy,
    records: Vec<RecordResult>,
    loading: bool,
    #[props(!optional)] result: Option<CatalogResult>,
    search_options: SearchOptions,
    search: Callback<SearchOptions>,
    #[props(!optional)] on_record_add: Option<Callback<RecordResult>>,
) -> Element {
    if loading {
        return rsx! { LoadingIndicator { label: "Searching..." } };
    }
    let pagination = result.as_ref().map(|r| Pagination::from_result(r, &search_options));

    rsx! {
        if let Some(pagination) = pagination {
            div {
                id: "x-catalog-result-title-row",
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 6px;
                    padding: 7px;
                    align-items: center;
                ",
                h1 {
                    style: "font-size: 18px; font-weight: 300; color:rgb(75, 87, 112);",
                    "{pagination.records_matched} records found"
                }
                div { style: "flex-grow: 1;" }
                CatalogPagination { pagination, search_options: search_options.clone(), search }
            }
        }
        ComponentErrorBoundary {
            ul {
                id: "x-catalog-records",
                style: "
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    overflow-y: auto;
                ",
                for (index, record) in records.iter().enumerate() {
                    li {
                        key: "{record_key(index, record)}",
                        CatalogRecordItem { view: policy.view(record), record: record.clone(), on_record_add }
                    }
                }
            }
        }
    }
}
