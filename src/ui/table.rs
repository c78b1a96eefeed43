//! Rows of the search results table.

use crate::{constants::TABLE_COLUMN_COUNT, data::park::ParkFeature};

/// Column keys of the results table, in display order
pub const TABLE_COLUMNS: [&str; TABLE_COLUMN_COUNT] = [
    "park_id",
    "park_name",
    "location_description",
    "classification_type",
    "linear_park_system",
    "park_category",
    "district",
    "electoral_ward",
    "neighbourhood",
    "cca",
    "area_in_hectares",
    "land_area_in_hectares",
    "water_area_in_hectares",
];

pub const NO_PARKS_MESSAGE: &str = "No parks found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// One park, a cell per column
    Cells(Vec<String>),
    /// A message cell spanning `colspan` columns
    Message { text: String, colspan: usize },
}

impl TableRow {
    pub fn from_park(park: &ParkFeature) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        TableRow::Cells(vec![
            park.id.clone(),
            park.name.clone(),
            text(&park.location_description),
            text(&park.classification_type),
            text(&park.linear_park_system),
            text(&park.category),
            text(&park.district),
            text(&park.electoral_ward),
            text(&park.neighbourhood),
            text(&park.cca),
            text(&park.area_text),
            text(&park.land_area_text),
            text(&park.water_area_text),
        ])
    }

    /// The single row shown for an empty result
    pub fn no_parks() -> Self {
        TableRow::Message {
            text: NO_PARKS_MESSAGE.to_string(),
            colspan: TABLE_COLUMN_COUNT,
        }
    }

    pub fn cells(&self) -> Option<&[String]> {
        match self {
            TableRow::Cells(cells) => Some(cells),
            TableRow::Message { .. } => None,
        }
    }
}

/// "Found N parks."
pub fn count_message(count: usize) -> String {
    format!("Found {} parks.", count)
}
