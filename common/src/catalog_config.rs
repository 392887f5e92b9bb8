//! Host configuration for the catalog and annotation tools.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    annotation_style::{AnnotationStylePresets, GeometryType, StyleEntry},
    catalog_service::{FormatOption, ServiceMap},
    error::CatalogError,
    search_request::SearchOptions,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    pub services: ServiceMap,
    pub selected_service: Option<String>,
    pub format_options: Vec<FormatOption>,
    pub search_options: SearchOptions,
    pub annotation_styles: BTreeMap<GeometryType, StyleEntry>,
}

impl CatalogConfig {
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let config: Self = serde_json::from_str(text).map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;
        if let Some(selected) = &config.selected_service {
            if !config.services.contains_key(selected) {
                return Err(CatalogError::UnknownService(selected.clone()));
            }
        }
        Ok(config)
    }

    /// The configured selection, or the first service.
    pub fn default_service(&self) -> Option<String> {
        self.selected_service.clone().or_else(|| self.services.keys().next().cloned())
    }

    pub fn annotation_presets(&self) -> AnnotationStylePresets {
        AnnotationStylePresets::with_overrides(&self.annotation_styles)
    }
}
