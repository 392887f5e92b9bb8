//! Initial styles for a new annotation, per drawable geometry type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    Text,
    Circle,
}

impl GeometryType {
    pub const ALL: [GeometryType; 5] = [Self::Point, Self::LineString, Self::Polygon, Self::Text, Self::Circle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::Text => "Text",
            Self::Circle => "Circle",
        }
    }
}

/// A style attribute mapping, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct StyleEntry(pub Map<String, Value>);

impl StyleEntry {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn str_attr(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_attr("id")
    }

    /// Attributes of `other` win over ours.
    pub fn merged(&self, other: &StyleEntry) -> StyleEntry {
        let mut map = self.0.clone();
        for (key, value) in &other.0 {
            map.insert(key.clone(), value.clone());
        }
        StyleEntry(map)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationStylePresets {
    presets: BTreeMap<GeometryType, StyleEntry>,
}

impl Default for AnnotationStylePresets {
    fn default() -> Self {
        let stroke = json!({
            "color": "#ffcc33",
            "opacity": 1,
            "weight": 3,
            "fillColor": "#ffffff",
            "fillOpacity": 0.2
        });
        let mut presets = BTreeMap::new();
        presets.insert(GeometryType::Point, StyleEntry::from_value(json!({
            "iconGlyph": "comment",
            "iconShape": "square",
            "iconColor": "blue",
            "highlight": false,
            "iconAnchor": [0.5, 1]
        })));
        presets.insert(GeometryType::LineString, StyleEntry::from_value(stroke.clone()).with("editing", json!({ "fill": 1 })));
        presets.insert(GeometryType::Polygon, StyleEntry::from_value(stroke.clone()).with("editing", json!({ "fill": 1 })));
        presets.insert(GeometryType::Circle, StyleEntry::from_value(stroke).with("radius", 10));
        presets.insert(GeometryType::Text, StyleEntry::from_value(json!({
            "fontStyle": "normal",
            "fontSize": "14",
            "fontSizeUom": "px",
            "fontFamily": "Arial",
            "fontWeight": "normal",
            "font": "14px Arial",
            "textAlign": "center",
            "color": "#000000",
            "opacity": 1,
            "fillColor": "#000000",
            "fillOpacity": 1
        })));
        Self { presets }
    }
}

impl AnnotationStylePresets {
    /// Built-in presets with caller defaults merged over them.
    pub fn with_overrides(overrides: &BTreeMap<GeometryType, StyleEntry>) -> Self {
        let mut presets = Self::default();
        for (geometry_type, attributes) in overrides {
            let merged = presets.preset(*geometry_type).merged(attributes);
            presets.presets.insert(*geometry_type, merged);
        }
        presets
    }

    pub fn preset(&self, geometry_type: GeometryType) -> StyleEntry {
        self.presets.get(&geometry_type).cloned().unwrap_or_default()
    }
}

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Supplies the extra styles drawn at the ends of a new linestring.
pub trait EndpointStyles {
    fn endpoint_styles(&self, presets: &AnnotationStylePresets, ids: &mut dyn IdGenerator) -> Vec<StyleEntry>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinestringEndpoints;

impl EndpointStyles for LinestringEndpoints {
    fn endpoint_styles(&self, presets: &AnnotationStylePresets, ids: &mut dyn IdGenerator) -> Vec<StyleEntry> {
        [("startPoint", "StartPoint Style"), ("endPoint", "EndPoint Style")]
            .into_iter()
            .map(|(geometry, title)| {
                presets
                    .preset(GeometryType::Point)
                    .with("iconAnchor", json!([0.5, 0.5]))
                    .with("type", "Point")
                    .with("title", title)
                    .with("geometry", geometry)
                    .with("filtering", false)
                    .with("id", ids.next_id())
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStyleSelection {
    pub geometry_type: GeometryType,
    pub styles: Vec<StyleEntry>,
    /// Text features need the "add text" action before styles are applied.
    pub add_text: bool,
}

fn highlighted(presets: &AnnotationStylePresets, geometry_type: GeometryType, ids: &mut dyn IdGenerator) -> StyleEntry {
    presets
        .preset(geometry_type)
        .with("type", geometry_type.as_str())
        .with("highlight", true)
        .with("id", ids.next_id())
}

pub fn derive_feature_styles(
    geometry_type: GeometryType,
    presets: &AnnotationStylePresets,
    endpoints: &dyn EndpointStyles,
    ids: &mut dyn IdGenerator,
) -> FeatureStyleSelection {
    let styles = match geometry_type {
        GeometryType::Point | GeometryType::Polygon => vec![highlighted(presets, geometry_type, ids)],
        GeometryType::LineString => {
            let mut styles = vec![highlighted(presets, GeometryType::LineString, ids)];
            styles.extend(endpoints.endpoint_styles(presets, ids));
            styles
        }
        GeometryType::Text => vec![highlighted(presets, GeometryType::Text, ids).with("title", "Text Style")],
        GeometryType::Circle => vec![
            highlighted(presets, GeometryType::Circle, ids).with("title", "Circle Style"),
            presets
                .preset(GeometryType::Point)
                .with("highlight", true)
                .with("iconAnchor", json!([0.5, 0.5]))
                .with("type", "Point")
                .with("title", "Center Style")
                .with("filtering", false)
                .with("geometry", "centerPoint")
                .with("id", ids.next_id()),
        ],
    };
    tracing::debug!(geometry = geometry_type.as_str(), count = styles.len(), "derived annotation styles");
    FeatureStyleSelection { geometry_type, styles, add_text: geometry_type == GeometryType::Text }
}
