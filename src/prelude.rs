//! Prelude module for common parkmap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use parkmap::prelude::*;`

pub use crate::core::{
    config::{DataSourceConfig, MapViewConfig, ParkMapConfig},
    geo::{LatLng, LatLngBounds, Point},
    map::HeadlessMap,
    viewport::Viewport,
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    manager::LayerManager,
    style::{color_for_area, Color, PolygonStyle},
    tile::TileLayer,
    vector::OverlayLayer,
};

pub use crate::data::park::{ParkFeature, ParkGeometry};

pub use crate::query::{CategoricalField, FeatureSource, HttpFeatureSource, Query};

pub use crate::app::ParkMapApp;
pub use crate::filter::{FilterController, FilterKind, FilterOption};
pub use crate::renderer::ParkRenderer;
pub use crate::search::{SearchOutcome, SearchPanel};
pub use crate::traits::{MapWidget, ParkView};
pub use crate::ui::table::TableRow;

pub use crate::{Error as ParkMapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
