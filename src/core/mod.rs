pub mod config;
pub mod constants;
pub mod geo;
pub mod map;
pub mod viewport;

pub use config::{DataSourceConfig, MapViewConfig, ParkMapConfig};
pub use geo::{LatLng, LatLngBounds, Point};
pub use map::HeadlessMap;
pub use viewport::Viewport;
