use crate::core::geo::{LatLng, LatLngBounds, Point};
use serde::{Deserialize, Serialize};

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    /// Moves the view to `center` at `zoom`
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.set_zoom(zoom);
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level (EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = 256.0 * 2_f64.powf(z);
        let world = 2.0 * std::f64::consts::PI * 6378137.0;

        let mercator = lat_lng.to_mercator();
        let pixel_x = (mercator.x + world / 2.0) / world * scale;
        let pixel_y = (-mercator.y + world / 2.0) / world * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Centers on `bounds` and picks the highest zoom at which they still fit
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: Option<f64>) {
        let padding = padding.unwrap_or(20.0);

        self.center = bounds.center();

        let available = Point::new(self.size.x - 2.0 * padding, self.size.y - 2.0 * padding);
        let mut best_zoom = self.min_zoom;

        for test_zoom in (self.min_zoom as i32)..=(self.max_zoom as i32) {
            let zoom = test_zoom as f64;

            let nw = self.project(
                &LatLng::new(bounds.north_east.lat, bounds.south_west.lng),
                Some(zoom),
            );
            let se = self.project(
                &LatLng::new(bounds.south_west.lat, bounds.north_east.lng),
                Some(zoom),
            );

            let bounds_width = (se.x - nw.x).abs();
            let bounds_height = (se.y - nw.y).abs();

            if bounds_width <= available.x && bounds_height <= available.y {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        self.set_zoom(best_zoom);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(
            LatLng::new(49.876, -97.114),
            13.0,
            Point::new(800.0, 600.0),
        );

        assert_eq!(viewport.zoom, 13.0);
        assert_eq!(viewport.center.lat, 49.876);
        assert_eq!(viewport.size.x, 800.0);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        viewport.set_zoom_limits(2.0, 15.0);

        viewport.set_zoom(1.0); // Below minimum
        assert_eq!(viewport.zoom, 2.0);

        viewport.set_zoom(20.0); // Above maximum
        assert_eq!(viewport.zoom, 15.0);
    }

    #[test]
    fn test_fit_small_bounds_zooms_in() {
        let mut viewport = Viewport::new(LatLng::new(49.876, -97.114), 13.0, Point::new(800.0, 600.0));
        viewport.set_zoom_limits(0.0, 15.0);

        let park = LatLngBounds::from_coords(49.870, -97.240, 49.872, -97.236);
        viewport.fit_bounds(&park, None);

        assert_eq!(viewport.center, park.center());
        assert_eq!(viewport.zoom, 15.0);
    }

    #[test]
    fn test_fit_large_bounds_zooms_out() {
        let mut viewport = Viewport::new(LatLng::new(49.876, -97.114), 15.0, Point::new(800.0, 600.0));
        viewport.set_zoom_limits(0.0, 15.0);

        let city = LatLngBounds::from_coords(49.70, -97.40, 50.00, -96.90);
        viewport.fit_bounds(&city, None);

        assert!(viewport.zoom < 13.0);
        assert!(viewport.zoom >= 9.0);
    }
}
