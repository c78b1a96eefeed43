pub mod geojson;
pub mod park;

pub use geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};
pub use park::{parse_feature_collection, ParkFeature, ParkGeometry, Ring};
