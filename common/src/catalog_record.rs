//! Records returned by a catalog query.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "type")]
    pub reference_type: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl Reference {
    pub fn is_image(&self) -> bool {
        self.reference_type == "thumbnail" || self.reference_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecordResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub title: String,
    pub description: String,
    pub references: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl RecordResult {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), ..Default::default() }
    }

    /// Thumbnail url, falling back to the first image-like reference.
    pub fn preview_url(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.references.iter().find(|r| r.is_image()).map(|r| r.url.as_str()))
    }
}

/// Summary of the last search, as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogResult {
    pub number_of_records_matched: u64,
    pub number_of_records_returned: u64,
    pub next_record: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(reference_type: &str, url: &str) -> Reference {
        Reference { reference_type: reference_type.to_string(), url: url.to_string(), params: BTreeMap::new() }
    }

    #[test]
    fn preview_prefers_thumbnail() {
        let mut record = RecordResult::new("t", "d");
        record.references = vec![reference("image/png", "ref.png")];
        record.thumbnail = Some("thumb.png".to_string());
        assert_eq!(record.preview_url(), Some("thumb.png"));
    }

    #[test]
    fn preview_falls_back_to_image_reference() {
        let mut record = RecordResult::new("t", "d");
        record.references = vec![reference("OGC:WMS", "https://example.org/wms"), reference("image/png", "ref.png")];
        assert_eq!(record.preview_url(), Some("ref.png"));
    }

    #[test]
    fn no_preview_without_image_data() {
        let mut record = RecordResult::new("t", "d");
        record.references = vec![reference("OGC:WMS", "https://example.org/wms")];
        record.thumbnail = Some(String::new());
        assert_eq!(record.preview_url(), None);
    }

    #[test]
    fn result_reads_camel_case() {
        let result: CatalogResult = serde_json::from_str(r#"{"numberOfRecordsMatched": 12}"#).unwrap();
        assert_eq!(result.number_of_records_matched, 12);
        assert_eq!(result.next_record, None);
    }
}
