//! # parkmap
//!
//! An interactive map of parks and open spaces backed by the City of Winnipeg
//! open-data feed.
//!
//! The crate owns the data-to-map pipeline: it queries the remote feature
//! collection, turns each park into a styled overlay keyed by its area, and
//! keeps the info panel, filter lists and search table in step with what the
//! user does. The map widget, the query service and the page are reached
//! through the [`MapWidget`], [`FeatureSource`] and [`ParkView`] traits.

pub mod app;
pub mod core;
pub mod data;
pub mod filter;
pub mod layers;
pub mod prelude;
pub mod query;
pub mod renderer;
pub mod search;
pub mod sequence;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use app::ParkMapApp;

pub use crate::core::{
    config::ParkMapConfig,
    geo::{LatLng, LatLngBounds},
    map::HeadlessMap,
    viewport::Viewport,
};

pub use data::park::{ParkFeature, ParkGeometry};

pub use filter::{FilterController, FilterKind, FilterOption, FilterOptionLists};

pub use layers::{style::PolygonStyle, tile::TileLayer, vector::OverlayLayer};

pub use query::{source::FeatureSource, source::HttpFeatureSource, CategoricalField, Query};

pub use renderer::{HoverState, ParkRenderer};

pub use search::{SearchOutcome, SearchPanel};

pub use traits::{MapWidget, ParkView};

pub use ui::table::TableRow;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ParkMapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ParkMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with HTTP status {0}")]
    Status(u16),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("No {0} selected")]
    MissingFilterValue(CategoricalField),

    #[error("Unknown filter kind: {0}")]
    UnknownFilterKind(String),
}

impl ParkMapError {
    /// Transport failures and non-success responses.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status(_))
    }

    /// Bodies that could not be read as a park feature collection.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::Serialization(_))
    }

    /// Bad filter input rather than a failure.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::MissingFilterValue(_) | Self::UnknownFilterKind(_))
    }
}

/// Error type alias for convenience
pub type Error = ParkMapError;

/// Installs `env_logger` honouring `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
