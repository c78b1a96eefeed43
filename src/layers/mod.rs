#[macro_use]
pub mod macros;

pub mod base;
pub mod manager;
pub mod style;
pub mod tile;
pub mod vector;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use manager::LayerManager;
pub use style::{color_for_area, legend_entries, Color, LegendEntry, PolygonStyle};
pub use tile::{TileLayer, TileLayerOptions};
pub use vector::OverlayLayer;
