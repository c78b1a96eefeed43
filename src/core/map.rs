use crate::{
    core::{
        config::MapViewConfig,
        constants::FIT_BOUNDS_PADDING,
        geo::{LatLng, LatLngBounds},
        viewport::Viewport,
    },
    layers::{
        base::{LayerTrait, LayerType},
        manager::LayerManager,
        style::PolygonStyle,
        tile::TileLayer,
        vector::OverlayLayer,
    },
    prelude::HashMap,
    traits::MapWidget,
    ui::controls::{Control, ControlContent},
    ParkMapError, Result,
};

/// A map widget that keeps everything in memory
///
/// Used by the command-line driver and by tests; it records what a real
/// widget would draw without drawing it.
pub struct HeadlessMap {
    layers: LayerManager,
    viewport: Viewport,
    controls: HashMap<String, Control>,
    attributions: Vec<String>,
}

impl HeadlessMap {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            layers: LayerManager::new(),
            viewport,
            controls: HashMap::default(),
            attributions: Vec::new(),
        }
    }

    /// A map sized and zoom-limited per `config`, not yet centered
    pub fn from_config(config: &MapViewConfig) -> Self {
        let mut viewport = Viewport::new(config.center, config.zoom, config.size);
        viewport.set_zoom_limits(config.min_zoom, config.max_zoom);
        Self::new(viewport)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn overlay(&self, id: &str) -> Option<&OverlayLayer> {
        self.layers
            .get_layer(id)
            .and_then(|layer| layer.as_any().downcast_ref::<OverlayLayer>())
    }

    pub fn overlay_ids(&self) -> Vec<String> {
        self.layers.ids_of_type(LayerType::Overlay)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlay_ids().len()
    }

    pub fn tile_layer_count(&self) -> usize {
        self.layers.ids_of_type(LayerType::Tile).len()
    }

    /// Id of the layer drawn last
    pub fn top_layer_id(&self) -> Option<String> {
        self.layers.top().map(|layer| layer.id().to_string())
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.get(id)
    }

    pub fn attributions(&self) -> &[String] {
        &self.attributions
    }
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::from_config(&MapViewConfig::default())
    }
}

impl MapWidget for HeadlessMap {
    fn add_tile_layer(&mut self, layer: TileLayer) -> Result<()> {
        let attribution = layer.attribution().to_string();
        self.layers.add_layer(Box::new(layer))?;
        if !attribution.is_empty() {
            self.add_attribution(&attribution);
        }
        Ok(())
    }

    fn add_overlay(&mut self, overlay: OverlayLayer) -> Result<()> {
        self.layers.add_layer(Box::new(overlay))
    }

    fn set_overlay_style(&mut self, id: &str, style: PolygonStyle) -> Result<()> {
        self.layers
            .with_layer_mut(id, |layer| {
                layer
                    .as_any_mut()
                    .downcast_mut::<OverlayLayer>()
                    .map(|overlay| overlay.set_style(style))
            })
            .flatten()
            .ok_or_else(|| ParkMapError::Layer(format!("no overlay '{}'", id)))
    }

    fn bring_to_front(&mut self, id: &str) -> Result<()> {
        if self.layers.bring_to_front(id) {
            Ok(())
        } else {
            Err(ParkMapError::Layer(format!("no layer '{}'", id)))
        }
    }

    fn remove_layer(&mut self, id: &str) -> bool {
        self.layers.remove_layer(id).is_some()
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.viewport.fit_bounds(bounds, Some(FIT_BOUNDS_PADDING));
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.viewport.set_view(center, zoom);
    }

    fn add_control(&mut self, control: Control) -> Result<()> {
        if self.controls.contains_key(&control.id) {
            return Err(ParkMapError::Layer(format!(
                "control '{}' already attached",
                control.id
            )));
        }
        self.controls.insert(control.id.clone(), control);
        Ok(())
    }

    fn update_control(&mut self, id: &str, content: ControlContent) -> Result<()> {
        let control = self
            .controls
            .get_mut(id)
            .ok_or_else(|| ParkMapError::Layer(format!("no control '{}'", id)))?;
        control.content = content;
        Ok(())
    }

    fn add_attribution(&mut self, text: &str) {
        if !self.attributions.iter().any(|existing| existing == text) {
            self.attributions.push(text.to_string());
        }
    }

    fn layer_ids(&self) -> Vec<String> {
        self.layers.ids()
    }
}
