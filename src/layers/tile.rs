use crate::{
    constants::{MAX_ZOOM, MIN_ZOOM, OSM_ATTRIBUTION, OSM_TILE_URL, TILE_LAYER_ID, TILE_SIZE},
    core::config::MapViewConfig,
    layers::base::{LayerProperties, LayerTrait, LayerType},
};

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "https://tile.openstreetmap.org/{z}/{x}/{y}.png")
    pub url_template: String,
    /// Attribution text
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            tile_size: TILE_SIZE,
            max_zoom: MAX_ZOOM as u8,
            min_zoom: MIN_ZOOM as u8,
        }
    }
}

impl TileLayerOptions {
    /// Tile options matching a map view configuration
    pub fn from_view_config(config: &MapViewConfig) -> Self {
        Self {
            url_template: config.tile_url_template.clone(),
            attribution: config.tile_attribution.clone(),
            tile_size: TILE_SIZE,
            max_zoom: config.max_zoom.clamp(0.0, u8::MAX as f64) as u8,
            min_zoom: config.min_zoom.clamp(0.0, u8::MAX as f64) as u8,
        }
    }
}

/// The base map imagery underneath the park overlays
#[derive(Debug, Clone)]
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
}

impl TileLayer {
    pub fn new(id: String, options: TileLayerOptions) -> Self {
        let mut properties = LayerProperties::new(id, "Base map".to_string(), LayerType::Tile);
        properties.z_index = -1;
        Self {
            properties,
            options,
        }
    }

    /// OpenStreetMap tiles under the default layer id
    pub fn openstreetmap() -> Self {
        Self::new(TILE_LAYER_ID.to_string(), TileLayerOptions::default())
    }

    pub fn options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn attribution(&self) -> &str {
        &self.options.attribution
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(properties);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openstreetmap_layer() {
        let layer = TileLayer::openstreetmap();
        assert_eq!(layer.id(), TILE_LAYER_ID);
        assert_eq!(layer.layer_type(), LayerType::Tile);
        assert_eq!(layer.options().max_zoom, 15);
        assert!(layer.attribution().contains("OpenStreetMap"));
    }

    #[test]
    fn test_options_follow_view_config() {
        let config = MapViewConfig {
            max_zoom: 12.0,
            tile_url_template: "https://tiles.example.org/{z}/{x}/{y}.png".to_string(),
            ..MapViewConfig::default()
        };
        let options = TileLayerOptions::from_view_config(&config);
        assert_eq!(options.max_zoom, 12);
        assert!(options.url_template.starts_with("https://tiles.example.org"));
    }
}
