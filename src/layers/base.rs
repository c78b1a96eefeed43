use crate::core::geo::LatLngBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    /// Base map imagery; infrastructure the park renderer never removes
    Tile,
    /// One park polygon drawn from fetched data
    Overlay,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::Overlay => write!(f, "overlay"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub z_index: i32,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            z_index: 0,
        }
    }
}

/// Common surface of everything the map holds as a layer
pub trait LayerTrait: Send + Sync {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    fn z_index(&self) -> i32;

    fn set_z_index(&mut self, z_index: i32);

    /// Geographic extent, when the layer has one
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    fn as_any(&self) -> &dyn std::any::Any;

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new(
            "overlay-1-0".to_string(),
            "Kildonan Park".to_string(),
            LayerType::Overlay,
        );

        assert_eq!(props.id, "overlay-1-0");
        assert_eq!(props.name, "Kildonan Park");
        assert_eq!(props.layer_type, LayerType::Overlay);
        assert_eq!(props.z_index, 0);
    }

    #[test]
    fn test_layer_type_display() {
        assert_eq!(LayerType::Tile.to_string(), "tile");
        assert_eq!(LayerType::Overlay.to_string(), "overlay");
    }
}
