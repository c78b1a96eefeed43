use crate::{ParkMapError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A GeoJSON position, `[longitude, latitude]`
///
/// Extra elements such as an altitude are accepted and dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lng: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<f64>::deserialize(deserializer)?;
        match values.as_slice() {
            [lng, lat, ..] => Ok(Self::new(*lng, *lat)),
            _ => Err(de::Error::invalid_length(
                values.len(),
                &"at least 2 elements in a position",
            )),
        }
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.lng_lat().serialize(serializer)
    }
}

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    /// Gets a property value
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Property rendered as text; empty strings and nulls count as absent
    pub fn text_property(&self, key: &str) -> Option<String> {
        match self.property(key)? {
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Non-negative number stored either as a JSON number or a numeric string
    pub fn number_property(&self, key: &str) -> Option<f64> {
        let value = match self.property(key)? {
            serde_json::Value::Number(n) => n.as_f64()?,
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };

        (value.is_finite() && value >= 0.0).then_some(value)
    }

    /// The feature's geometry, falling back to a geometry nested in the properties
    pub fn resolved_geometry(&self) -> Option<GeoJsonGeometry> {
        if let Some(geometry) = &self.geometry {
            return Some(geometry.clone());
        }

        let nested = self.property("geometry")?;
        serde_json::from_value(nested.clone()).ok()
    }
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
    Geometry(GeoJsonGeometry),
}

impl GeoJson {
    /// Parses a raw GeoJSON document
    pub fn from_str(geojson_str: &str) -> Result<Self> {
        serde_json::from_str(geojson_str)
            .map_err(|e| ParkMapError::ParseError(format!("Invalid GeoJSON: {}", e)))
    }

    /// Features of a FeatureCollection; anything else is rejected
    pub fn into_features(self) -> Result<Vec<GeoJsonFeature>> {
        match self {
            GeoJson::FeatureCollection { features } => Ok(features),
            GeoJson::Feature(_) => Err(ParkMapError::ParseError(
                "expected a FeatureCollection, got a single Feature".to_string(),
            )),
            GeoJson::Geometry(_) => Err(ParkMapError::ParseError(
                "expected a FeatureCollection, got a bare geometry".to_string(),
            )),
        }
    }
}
