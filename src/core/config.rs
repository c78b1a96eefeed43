//! Configuration for the data source and the initial map view
//!
//! Every field has a default matching the public Winnipeg dataset, so an
//! empty JSON object (or no file at all) yields a working setup. A partial
//! JSON document overrides only the fields it names.

use crate::core::constants::{
    DATASET_URL, DATA_ATTRIBUTION, DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM,
    OSM_ATTRIBUTION, OSM_TILE_URL, SEARCH_LIMIT, UNFILTERED_LIMIT,
};
use crate::core::geo::{LatLng, Point};
use crate::query::QueryLimits;
use crate::{ParkMapError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkMapConfig {
    pub data: DataSourceConfig,
    pub map: MapViewConfig,
}

impl ParkMapConfig {
    /// Parses a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Short timeouts and a local endpoint, for tests that must never reach the network
    pub fn for_testing() -> Self {
        Self {
            data: DataSourceConfig {
                endpoint: "http://127.0.0.1:9/resource/parks.geojson".to_string(),
                timeout_secs: 1,
                ..DataSourceConfig::default()
            },
            map: MapViewConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.data.endpoint_url()?;

        if self.data.unfiltered_limit == 0 || self.data.search_limit == 0 {
            return Err(ParkMapError::Config(
                "query limits must be greater than zero".to_string(),
            ));
        }

        let map = &self.map;
        if map.min_zoom > map.max_zoom || map.zoom < map.min_zoom || map.zoom > map.max_zoom {
            return Err(ParkMapError::Config(format!(
                "zoom {} must lie within [{}, {}]",
                map.zoom, map.min_zoom, map.max_zoom
            )));
        }

        if !map.center.is_valid() {
            return Err(ParkMapError::Config(format!(
                "center ({}, {}) is not a valid coordinate",
                map.center.lat, map.center.lng
            )));
        }

        Ok(())
    }
}

/// Where and how park records are fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// GeoJSON resource URL of the dataset
    pub endpoint: String,
    /// `$limit` for unfiltered and region-filtered queries
    pub unfiltered_limit: u32,
    /// `$limit` for name searches
    pub search_limit: u32,
    /// Whole-request timeout
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl DataSourceConfig {
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint).map_err(|e| {
            ParkMapError::Config(format!("invalid endpoint {:?}: {}", self.endpoint, e))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn limits(&self) -> QueryLimits {
        QueryLimits {
            unfiltered: self.unfiltered_limit,
            search: self.search_limit,
        }
    }
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DATASET_URL.to_string(),
            unfiltered_limit: UNFILTERED_LIMIT,
            search_limit: SEARCH_LIMIT,
            timeout_secs: 30,
            user_agent: concat!("parkmap/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Initial view, tiles and credits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Pixel size of the map container
    pub size: Point,
    pub tile_url_template: String,
    pub tile_attribution: String,
    pub data_attribution: String,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            size: Point::new(1024.0, 768.0),
            tile_url_template: OSM_TILE_URL.to_string(),
            tile_attribution: OSM_ATTRIBUTION.to_string(),
            data_attribution: DATA_ATTRIBUTION.to_string(),
        }
    }
}
