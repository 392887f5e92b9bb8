//! Menu labels for the drawable geometry types.

use common::annotation_style::GeometryType;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTypeTitles {
    pub marker: String,
    pub line: String,
    pub polygon: String,
    pub text: String,
    pub circle: String,
}

impl Default for FeatureTypeTitles {
    fn default() -> Self {
        Self {
            marker: "Marker".to_string(),
            line: "Line".to_string(),
            polygon: "Polygon".to_string(),
            text: "Text".to_string(),
            circle: "Circle".to_string(),
        }
    }
}

impl FeatureTypeTitles {
    pub fn title(&self, geometry_type: GeometryType) -> &str {
        match geometry_type {
            GeometryType::Point => &self.marker,
            GeometryType::LineString => &self.line,
            GeometryType::Polygon => &self.polygon,
            GeometryType::Text => &self.text,
            GeometryType::Circle => &self.circle,
        }
    }
}
