use crate::{
    core::geo::LatLngBounds,
    data::park::ParkGeometry,
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        style::PolygonStyle,
    },
};

/// One park polygon on the map
#[derive(Debug, Clone)]
pub struct OverlayLayer {
    properties: LayerProperties,
    /// Id of the park record this overlay was drawn from
    feature_id: String,
    geometry: ParkGeometry,
    style: PolygonStyle,
    /// Cached so hit tests and zooming don't walk the rings again
    bounds: Option<LatLngBounds>,
}

impl OverlayLayer {
    pub fn new(
        id: String,
        name: String,
        feature_id: String,
        geometry: ParkGeometry,
        style: PolygonStyle,
    ) -> Self {
        let bounds = geometry.bounds();
        Self {
            properties: LayerProperties::new(id, name, LayerType::Overlay),
            feature_id,
            geometry,
            style,
            bounds,
        }
    }

    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn geometry(&self) -> &ParkGeometry {
        &self.geometry
    }

    pub fn style(&self) -> &PolygonStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: PolygonStyle) {
        self.style = style;
    }
}

impl LayerTrait for OverlayLayer {
    crate::impl_layer_trait!(properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        self.bounds
    }
}
