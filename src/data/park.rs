//! Typed park and open-space records.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry, Position};
use crate::query::CategoricalField;
use crate::Result;
use serde::Serialize;

/// One ring of a polygon, in map coordinates
pub type Ring = Vec<LatLng>;

/// Area geometry of a park
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParkGeometry {
    /// A polygon with optional holes
    Polygon { exterior: Ring, holes: Vec<Ring> },
    /// A multi-polygon collection of (exterior, holes)
    MultiPolygon { polygons: Vec<(Ring, Vec<Ring>)> },
}

impl ParkGeometry {
    /// Converts polygonal GeoJSON; other geometry kinds are not parks
    pub fn from_geojson(geometry: &GeoJsonGeometry) -> Option<Self> {
        match geometry {
            GeoJsonGeometry::Polygon { coordinates } => {
                let (exterior, holes) = Self::split_rings(coordinates)?;
                Some(ParkGeometry::Polygon { exterior, holes })
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => {
                let polygons: Vec<_> = coordinates
                    .iter()
                    .filter_map(|rings| Self::split_rings(rings))
                    .collect();
                if polygons.is_empty() {
                    None
                } else {
                    Some(ParkGeometry::MultiPolygon { polygons })
                }
            }
            _ => None,
        }
    }

    fn split_rings(rings: &[Vec<Position>]) -> Option<(Ring, Vec<Ring>)> {
        let (exterior, holes) = rings.split_first()?;
        Some((
            Self::ring(exterior),
            holes.iter().map(|hole| Self::ring(hole)).collect(),
        ))
    }

    fn ring(positions: &[Position]) -> Ring {
        positions
            .iter()
            .map(|position| LatLng::from_position(position.lng_lat()))
            .collect()
    }

    /// All rings, exteriors and holes alike
    pub fn rings(&self) -> Vec<&Ring> {
        match self {
            ParkGeometry::Polygon { exterior, holes } => {
                std::iter::once(exterior).chain(holes.iter()).collect()
            }
            ParkGeometry::MultiPolygon { polygons } => polygons
                .iter()
                .flat_map(|(exterior, holes)| std::iter::once(exterior).chain(holes.iter()))
                .collect(),
        }
    }

    /// A geometry can be drawn once it has at least one ring with a position
    pub fn is_drawable(&self) -> bool {
        self.rings().iter().any(|ring| !ring.is_empty())
    }

    /// Bounding box of the exterior rings
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let exteriors: Vec<&Ring> = match self {
            ParkGeometry::Polygon { exterior, .. } => vec![exterior],
            ParkGeometry::MultiPolygon { polygons } => {
                polygons.iter().map(|(exterior, _)| exterior).collect()
            }
        };

        exteriors
            .into_iter()
            .filter_map(|ring| LatLngBounds::from_points(ring))
            .reduce(|acc, bounds| acc.union(&bounds))
    }
}

/// One park or open-space record
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParkFeature {
    pub id: String,
    pub name: String,
    pub geometry: Option<ParkGeometry>,
    pub area_hectares: Option<f64>,
    pub land_area_hectares: Option<f64>,
    pub water_area_hectares: Option<f64>,
    /// Area values as the service delivered them, for display
    pub area_text: Option<String>,
    pub land_area_text: Option<String>,
    pub water_area_text: Option<String>,
    pub location_description: Option<String>,
    pub district: Option<String>,
    pub electoral_ward: Option<String>,
    pub neighbourhood: Option<String>,
    pub classification_type: Option<String>,
    pub category: Option<String>,
    pub linear_park_system: Option<String>,
    pub cca: Option<String>,
}

impl ParkFeature {
    /// Reads the dataset's property names into a typed record
    pub fn from_geojson(feature: &GeoJsonFeature) -> Self {
        let id = feature
            .text_property("park_id")
            .or_else(|| match &feature.id {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(serde_json::Value::Number(n)) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_default();

        Self {
            id,
            name: feature.text_property("park_name").unwrap_or_default(),
            geometry: feature
                .resolved_geometry()
                .as_ref()
                .and_then(ParkGeometry::from_geojson),
            area_hectares: feature.number_property("area_in_hectares"),
            land_area_hectares: feature.number_property("land_area_in_hectares"),
            water_area_hectares: feature.number_property("water_area_in_hectares"),
            area_text: feature.text_property("area_in_hectares"),
            land_area_text: feature.text_property("land_area_in_hectares"),
            water_area_text: feature.text_property("water_area_in_hectares"),
            location_description: feature.text_property("location_description"),
            district: feature.text_property("district"),
            electoral_ward: feature.text_property("electoral_ward"),
            neighbourhood: feature.text_property("neighbourhood"),
            classification_type: feature.text_property("classification_type"),
            category: feature.text_property("park_category"),
            linear_park_system: feature.text_property("linear_park_system"),
            cca: feature.text_property("cca"),
        }
    }

    pub fn is_drawable(&self) -> bool {
        self.geometry.as_ref().is_some_and(ParkGeometry::is_drawable)
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.geometry.as_ref()?.bounds()
    }

    /// Value of one of the region attributes used for filtering
    pub fn categorical(&self, field: CategoricalField) -> Option<&str> {
        match field {
            CategoricalField::ElectoralWard => self.electoral_ward.as_deref(),
            CategoricalField::District => self.district.as_deref(),
            CategoricalField::Neighbourhood => self.neighbourhood.as_deref(),
        }
    }
}

/// Parses a response body into park records
pub fn parse_feature_collection(body: &str) -> Result<Vec<ParkFeature>> {
    let features = GeoJson::from_str(body)?.into_features()?;
    Ok(features.iter().map(ParkFeature::from_geojson).collect())
}
