//! Remote catalog service descriptors and the drafts used to edit them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Kind of remote service. Names outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ServiceType {
    #[default]
    Csw,
    Wms,
    Wmts,
    Tms,
    Wfs,
    Other(String),
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [Self::Csw, Self::Wms, Self::Wmts, Self::Tms, Self::Wfs];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Csw => "csw",
            Self::Wms => "wms",
            Self::Wmts => "wmts",
            Self::Tms => "tms",
            Self::Wfs => "wfs",
            Self::Other(name) => name,
        }
    }

    /// Known types only.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(name))
    }
}

impl From<String> for ServiceType {
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or(Self::Other(name))
    }
}

impl From<ServiceType> for String {
    fn from(service_type: ServiceType) -> Self {
        match service_type {
            ServiceType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for one remote geospatial data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_template: Option<String>,
    #[serde(default)]
    pub show_template: bool,
    #[serde(default)]
    pub hide_thumbnail: bool,
    #[serde(default)]
    pub autoload: bool,
}

impl ServiceDescriptor {
    pub fn new(service_type: ServiceType, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            service_type,
            url: url.into(),
            title: title.into(),
            format: None,
            metadata_template: None,
            show_template: false,
            hide_thumbnail: false,
            autoload: false,
        }
    }
}

/// Services keyed by their identifier, in a stable order.
pub type ServiceMap = BTreeMap<String, ServiceDescriptor>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    #[default]
    View,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOption {
    pub label: String,
    pub value: String,
}

impl FormatOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// The editable copy of a service while the panel is in edit mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDraft {
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub url: String,
    pub title: String,
    pub format: Option<String>,
    /// Id of the service being edited; `None` when adding a new one.
    pub old_service: Option<String>,
    pub show_advanced_settings: bool,
    pub show_template: bool,
    pub metadata_template: Option<String>,
    pub hide_thumbnail: bool,
    pub autoload: bool,
}

impl ServiceDraft {
    pub fn from_service(id: &str, service: &ServiceDescriptor) -> Self {
        Self {
            service_type: service.service_type.clone(),
            url: service.url.clone(),
            title: service.title.clone(),
            format: service.format.clone(),
            old_service: Some(id.to_string()),
            show_advanced_settings: false,
            show_template: service.show_template,
            metadata_template: service.metadata_template.clone(),
            hide_thumbnail: service.hide_thumbnail,
            autoload: service.autoload,
        }
    }

    /// Checks the draft against the registered services and returns the id and
    /// descriptor to store.
    pub fn validate(&self, services: &ServiceMap) -> Result<(String, ServiceDescriptor), CatalogError> {
        let url = self.url.trim();
        let title = self.title.trim();
        if url.is_empty() {
            return Err(CatalogError::MissingField("url"));
        }
        if title.is_empty() {
            return Err(CatalogError::MissingField("title"));
        }
        let id = match &self.old_service {
            Some(old) => old.clone(),
            None => {
                if services.contains_key(title) {
                    return Err(CatalogError::DuplicateService(title.to_string()));
                }
                title.to_string()
            }
        };
        let descriptor = ServiceDescriptor {
            service_type: self.service_type.clone(),
            url: url.to_string(),
            title: title.to_string(),
            format: self.format.clone().filter(|f| !f.is_empty()),
            metadata_template: self.metadata_template.clone().filter(|t| !t.trim().is_empty()),
            show_template: self.show_template,
            hide_thumbnail: self.hide_thumbnail,
            autoload: self.autoload,
        };
        Ok((id, descriptor))
    }
}
