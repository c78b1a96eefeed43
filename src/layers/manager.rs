use crate::{
    layers::base::{LayerTrait, LayerType},
    prelude::HashMap,
    ParkMapError, Result,
};

/// Owns the map's layers and the order they are drawn in
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Ordered list of layer IDs for rendering (sorted by z-index)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Adds a layer to the manager
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        if self.layers.contains_key(&layer_id) {
            return Err(ParkMapError::Layer(format!(
                "layer '{}' already exists",
                layer_id
            )));
        }
        let z_index = layer.z_index();

        self.layers.insert(layer_id.clone(), layer);

        // Insert after every layer with an equal or lower z-index
        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.render_order.insert(insert_pos, layer_id);
        Ok(())
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Applies a function to a specific layer mutably
    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layers.get_mut(layer_id).map(|layer| f(layer.as_mut()))
    }

    /// Layer IDs in render order, bottom first
    pub fn ids(&self) -> Vec<String> {
        self.render_order.clone()
    }

    /// IDs of the layers of one kind, in render order
    pub fn ids_of_type(&self, layer_type: LayerType) -> Vec<String> {
        self.layers()
            .into_iter()
            .filter(|layer| layer.layer_type() == layer_type)
            .map(|layer| layer.id().to_string())
            .collect()
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Topmost layer
    pub fn top(&self) -> Option<&dyn LayerTrait> {
        self.render_order
            .last()
            .and_then(|id| self.layers.get(id).map(|l| l.as_ref()))
    }

    /// Raises a layer above every other layer. Returns false for unknown ids.
    pub fn bring_to_front(&mut self, layer_id: &str) -> bool {
        if !self.layers.contains_key(layer_id) {
            return false;
        }
        let top_z = self
            .layers
            .iter()
            .filter(|(id, _)| id.as_str() != layer_id)
            .map(|(_, layer)| layer.z_index())
            .max();

        if let (Some(top_z), Some(layer)) = (top_z, self.layers.get_mut(layer_id)) {
            if layer.z_index() <= top_z {
                layer.set_z_index(top_z.saturating_add(1));
            }
        }

        // Stable sort keeps the raised layer last among any equal z-index
        self.render_order.retain(|id| id != layer_id);
        self.render_order.push(layer_id.to_string());
        self.update_render_order();
        true
    }

    /// Updates the render order based on current z-indices
    pub fn update_render_order(&mut self) {
        self.render_order.sort_by(|a, b| {
            let z_a = self.layers.get(a).map(|l| l.z_index()).unwrap_or(0);
            let z_b = self.layers.get(b).map(|l| l.z_index()).unwrap_or(0);
            z_a.cmp(&z_b)
        });
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::data::park::ParkGeometry;
    use crate::layers::{style::PolygonStyle, tile::TileLayer, vector::OverlayLayer};

    fn overlay(id: &str) -> Box<dyn LayerTrait> {
        let geometry = ParkGeometry::Polygon {
            exterior: vec![
                LatLng::new(49.0, -97.0),
                LatLng::new(49.1, -97.0),
                LatLng::new(49.1, -97.1),
            ],
            holes: vec![],
        };
        Box::new(OverlayLayer::new(
            id.to_string(),
            id.to_string(),
            id.to_string(),
            geometry,
            PolygonStyle::for_area(None),
        ))
    }

    #[test]
    fn test_layer_manager() {
        let mut manager = LayerManager::new();
        assert!(manager.is_empty());

        manager.add_layer(overlay("a")).unwrap();
        manager.add_layer(Box::new(TileLayer::openstreetmap())).unwrap();
        manager.add_layer(overlay("b")).unwrap();

        assert_eq!(manager.len(), 3);
        // Tiles sit below overlays regardless of insertion order
        assert_eq!(manager.ids(), vec!["tiles", "a", "b"]);
        assert_eq!(manager.ids_of_type(LayerType::Overlay), vec!["a", "b"]);

        assert!(manager.remove_layer("a").is_some());
        assert!(manager.remove_layer("a").is_none());
        assert_eq!(manager.ids(), vec!["tiles", "b"]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut manager = LayerManager::new();
        manager.add_layer(overlay("a")).unwrap();
        assert!(matches!(
            manager.add_layer(overlay("a")),
            Err(ParkMapError::Layer(_))
        ));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_bring_to_front() {
        let mut manager = LayerManager::new();
        for id in ["a", "b", "c"] {
            manager.add_layer(overlay(id)).unwrap();
        }

        assert!(manager.bring_to_front("a"));
        assert_eq!(manager.top().map(|l| l.id()), Some("a"));
        assert_eq!(manager.ids(), vec!["b", "c", "a"]);

        assert!(manager.bring_to_front("b"));
        assert_eq!(manager.ids(), vec!["c", "a", "b"]);

        assert!(!manager.bring_to_front("missing"));
    }

    #[test]
    fn test_with_layer_mut() {
        let mut manager = LayerManager::new();
        manager.add_layer(overlay("a")).unwrap();

        let z = manager.with_layer_mut("a", |layer| {
            layer.set_z_index(7);
            layer.z_index()
        });
        assert_eq!(z, Some(7));
        assert_eq!(manager.get_layer("a").unwrap().z_index(), 7);
        assert_eq!(manager.with_layer_mut("zzz", |_| ()), None);
    }
}
