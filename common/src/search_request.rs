//! Derivation of the normalized search request handed to the search collaborator.

use serde::{Deserialize, Serialize};

use crate::{
    catalog_const::{DEFAULT_MAX_RECORDS, DEFAULT_START_POSITION},
    catalog_service::ServiceMap,
    error::CatalogError,
};

/// Pagination and filter state edited by the user before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub text: Option<String>,
    pub start_position: Option<u64>,
    pub max_records: Option<u64>,
}

impl SearchOptions {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn start_position(&self) -> u64 {
        self.start_position.unwrap_or(DEFAULT_START_POSITION).max(1)
    }

    pub fn max_records(&self) -> u64 {
        self.max_records.filter(|m| *m > 0).unwrap_or(DEFAULT_MAX_RECORDS)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_start_position(mut self, start_position: u64) -> Self {
        self.start_position = Some(start_position);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub format: String,
    pub url: String,
    pub start_position: u64,
    pub max_records: u64,
    pub text: String,
}

pub fn derive_search_request(
    selected_service: &str,
    services: &ServiceMap,
    search_options: &SearchOptions,
) -> Result<SearchRequest, CatalogError> {
    let service = services
        .get(selected_service)
        .ok_or_else(|| CatalogError::UnknownService(selected_service.to_string()))?;
    let request = SearchRequest {
        format: service.service_type.as_str().to_string(),
        url: service.url.clone(),
        start_position: search_options.start_position(),
        max_records: search_options.max_records(),
        text: search_options.text().to_string(),
    };
    tracing::debug!(service = selected_service, start = request.start_position, max = request.max_records, "derived catalog search request");
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service::{ServiceDescriptor, ServiceType};
    use serde_json::json;

    fn csw_services() -> ServiceMap {
        let mut services = ServiceMap::new();
        services.insert("csw".to_string(), ServiceDescriptor::new(ServiceType::Csw, "url", "csw"));
        services
    }

    #[test]
    fn empty_options_use_defaults() {
        let request = derive_search_request("csw", &csw_services(), &SearchOptions::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "format": "csw", "url": "url", "startPosition": 1, "maxRecords": 4, "text": "" })
        );
    }

    #[test]
    fn options_are_carried_over() {
        let options = SearchOptions { text: Some("rivers".to_string()), start_position: Some(9), max_records: Some(8) };
        let request = derive_search_request("csw", &csw_services(), &options).unwrap();
        assert_eq!(request.text, "rivers");
        assert_eq!(request.start_position, 9);
        assert_eq!(request.max_records, 8);
    }

    #[test]
    fn out_of_range_options_fall_back() {
        let options = SearchOptions { text: None, start_position: Some(0), max_records: Some(0) };
        let request = derive_search_request("csw", &csw_services(), &options).unwrap();
        assert_eq!(request.start_position, 1);
        assert_eq!(request.max_records, 4);
    }

    #[test]
    fn format_is_the_service_type_not_the_image_format() {
        let mut services = ServiceMap::new();
        let mut wms = ServiceDescriptor::new(ServiceType::Wms, "https://example.org/wms", "wms");
        wms.format = Some("image/png8".to_string());
        services.insert("wms".to_string(), wms);
        let request = derive_search_request("wms", &services, &SearchOptions::default()).unwrap();
        assert_eq!(request.format, "wms");
        assert_eq!(request.url, "https://example.org/wms");
    }

    #[test]
    fn unrecognised_service_type_is_sent_as_written() {
        let mut services = ServiceMap::new();
        services.insert("tiles".to_string(), ServiceDescriptor::new(ServiceType::Other("3dtiles".to_string()), "u", "tiles"));
        let request = derive_search_request("tiles", &services, &SearchOptions::default()).unwrap();
        assert_eq!(request.format, "3dtiles");
    }

    #[test]
    fn unknown_service_is_rejected() {
        let err = derive_search_request("missing", &csw_services(), &SearchOptions::default()).unwrap_err();
        assert_eq!(err, CatalogError::UnknownService("missing".to_string()));
    }
}
