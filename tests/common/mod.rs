//! Shared fixtures for the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use parkmap::{
    data::parse_feature_collection, filter::FilterOption, prelude::HashMap, CategoricalField,
    FeatureSource, ParkFeature, ParkMapError, ParkView, Query, Result, TableRow,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// A slice of the Winnipeg dataset in the shape the service returns it:
/// numbers as strings, one geometry nested under `properties`, one record
/// with no geometry at all.
pub const PARKS_GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [[[[-97.245, 49.868], [-97.225, 49.868], [-97.225, 49.880], [-97.245, 49.880], [-97.245, 49.868]]]]
            },
            "properties": {
                "park_id": "1001",
                "park_name": "Assiniboine Park",
                "location_description": "55 Pavilion Cres",
                "classification_type": "Regional Park",
                "park_category": "Park",
                "district": "CITY CENTRE",
                "electoral_ward": "RIVER HEIGHTS",
                "neighbourhood": "TUXEDO",
                "area_in_hectares": "151.2",
                "land_area_in_hectares": "149.9"
            }
        },
        {
            "type": "Feature",
            "geometry": null,
            "properties": {
                "park_id": "1002",
                "park_name": "Kildonan Park",
                "district": "LORD SELKIRK - WEST KILDONAN",
                "electoral_ward": "river heights",
                "neighbourhood": "KILDONAN PARK",
                "area_in_hectares": "39.7",
                "water_area_in_hectares": "0.8",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-97.095, 49.940], [-97.080, 49.940], [-97.080, 49.950], [-97.095, 49.940]]]
                }
            }
        },
        {
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-97.140, 49.870], [-97.138, 49.870], [-97.138, 49.872], [-97.140, 49.870]]]
            },
            "properties": {
                "park_id": "1003",
                "park_name": "St. Mary's Tot Lot",
                "district": "CITY CENTRE",
                "electoral_ward": "FORT ROUGE",
                "neighbourhood": "OSBORNE VILLAGE",
                "area_in_hectares": "0.3"
            }
        },
        {
            "type": "Feature",
            "geometry": null,
            "properties": {
                "park_id": "1004",
                "park_name": "Pembina Median",
                "electoral_ward": "FORT ROUGE",
                "area_in_hectares": "1.1"
            }
        }
    ]
}"#;

pub fn fixture_parks() -> Vec<ParkFeature> {
    parse_feature_collection(PARKS_GEOJSON).expect("fixture parses")
}

/// In-memory feature source answering queries the way the service does
pub struct FixtureSource {
    parks: Vec<ParkFeature>,
    calls: AtomicUsize,
    queries: Mutex<Vec<Query>>,
    failure: Option<u16>,
}

impl FixtureSource {
    pub fn new(parks: Vec<ParkFeature>) -> Self {
        Self {
            parks,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn winnipeg() -> Self {
        Self::new(fixture_parks())
    }

    /// Answers every query with the given HTTP status
    pub fn failing(status: u16) -> Self {
        Self {
            failure: Some(status),
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<Query> {
        self.queries.lock().unwrap().clone()
    }

    pub fn answer(&self, query: &Query) -> Vec<ParkFeature> {
        match query {
            Query::All => self.parks.clone(),
            Query::AttributeEquals { field, value } => self
                .parks
                .iter()
                .filter(|park| park.categorical(*field) == Some(value.as_str()))
                .cloned()
                .collect(),
            Query::NameContains(text) => {
                let needle = text.to_lowercase();
                let mut found: Vec<ParkFeature> = self
                    .parks
                    .iter()
                    .filter(|park| park.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                found.sort_by(|a, b| a.name.cmp(&b.name));
                found.truncate(100);
                found
            }
        }
    }
}

#[async_trait]
impl FeatureSource for FixtureSource {
    async fn fetch_features(&self, query: &Query) -> Result<Vec<ParkFeature>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        match self.failure {
            Some(status) => Err(ParkMapError::Status(status)),
            None => Ok(self.answer(query)),
        }
    }
}

/// Page double that remembers everything it was told
#[derive(Debug, Default)]
pub struct RecordingView {
    pub search_text: String,
    pub filter_options: HashMap<CategoricalField, Vec<FilterOption>>,
    pub rows: Vec<TableRow>,
    pub count_message: Option<String>,
    pub errors: Vec<String>,
    pub table_updates: usize,
}

impl ParkView for RecordingView {
    fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    fn set_filter_options(&mut self, field: CategoricalField, options: &[FilterOption]) {
        self.filter_options.insert(field, options.to_vec());
    }

    fn set_table_rows(&mut self, rows: &[TableRow]) {
        self.rows = rows.to_vec();
        self.table_updates += 1;
    }

    fn set_count_message(&mut self, message: Option<&str>) {
        self.count_message = message.map(str::to_string);
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
