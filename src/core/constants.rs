//! Dataset and map defaults for the Winnipeg parks view.
//! Keeping them in a single place makes it easier to retarget the map.

/// GeoJSON endpoint of the "Parks and Open Space" dataset.
pub const DATASET_URL: &str = "https://data.winnipeg.ca/resource/tx3d-pfxq.geojson";

/// Cap for unfiltered and region-filtered queries. The dataset holds ~1340 records.
pub const UNFILTERED_LIMIT: u32 = 2000;

/// Cap for name searches.
pub const SEARCH_LIMIT: u32 = 100;

/// Initial map center (downtown Winnipeg).
pub const DEFAULT_CENTER: (f64, f64) = (49.876025652254526, -97.1142843482076);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Zoom range offered by the tile provider.
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 15.0;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// OpenStreetMap tile template and credit.
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Credit line for the park data.
pub const DATA_ATTRIBUTION: &str = "Parks and Open Space data, City of Winnipeg Open Data";

/// Padding (pixels) kept around a park when zooming to it.
pub const FIT_BOUNDS_PADDING: f64 = 20.0;

/// Number of columns in the search results table.
pub const TABLE_COLUMN_COUNT: usize = 13;

/// Control ids used for the floating panels.
pub const INFO_CONTROL_ID: &str = "info";
pub const LEGEND_CONTROL_ID: &str = "legend";

/// Layer id of the base tile layer.
pub const TILE_LAYER_ID: &str = "tiles";
