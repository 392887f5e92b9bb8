//! How records of the active service are presented.

use crate::{catalog_record::RecordResult, catalog_service::ServiceDescriptor, metadata_template::render_metadata_template};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordRenderPolicy {
    /// Set only when the service has a template and asks to show it.
    pub metadata_template: Option<String>,
    pub hide_thumbnail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub title: String,
    pub description: String,
    pub templated_html: Option<String>,
    pub show_expand_toggle: bool,
    pub preview: Option<String>,
}

impl RecordRenderPolicy {
    pub fn for_service(service: Option<&ServiceDescriptor>) -> Self {
        let Some(service) = service else { return Self::default() };
        Self {
            metadata_template: service.metadata_template.clone().filter(|_| service.show_template),
            hide_thumbnail: service.hide_thumbnail,
        }
    }

    pub fn view(&self, record: &RecordResult) -> RecordView {
        let templated_html = self.metadata_template.as_deref().map(|t| render_metadata_template(t, record));
        let preview = if self.hide_thumbnail { None } else { record.preview_url().map(str::to_string) };
        RecordView {
            title: record.title.clone(),
            description: record.description.clone(),
            show_expand_toggle: templated_html.is_some(),
            templated_html,
            preview,
        }
    }
}

/// List key for a record card. Records are keyed by what they show, so a
/// new result set does not inherit per-card state by position alone.
pub fn record_key(index: usize, record: &RecordResult) -> String {
    format!("{index}-{}-{}", record.identifier.as_deref().unwrap_or(""), record.title)
}
