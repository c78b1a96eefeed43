//! Seams to the collaborators the crate drives but does not own
//!
//! The map widget and the page are reached only through these traits, so the
//! park logic runs the same against a browser binding, the headless map or a
//! test double.

use crate::{
    core::geo::{LatLng, LatLngBounds},
    filter::FilterOption,
    layers::{style::PolygonStyle, tile::TileLayer, vector::OverlayLayer},
    query::CategoricalField,
    ui::{
        controls::{Control, ControlContent},
        table::TableRow,
    },
    Result,
};

/// The slippy-map widget
pub trait MapWidget {
    fn add_tile_layer(&mut self, layer: TileLayer) -> Result<()>;

    /// Fails when a layer with the same id already exists
    fn add_overlay(&mut self, overlay: OverlayLayer) -> Result<()>;

    /// Fails when `id` is not an overlay on this map
    fn set_overlay_style(&mut self, id: &str, style: PolygonStyle) -> Result<()>;

    /// Draws the layer above all others
    fn bring_to_front(&mut self, id: &str) -> Result<()>;

    /// Returns whether a layer was removed
    fn remove_layer(&mut self, id: &str) -> bool;

    fn fit_bounds(&mut self, bounds: &LatLngBounds);

    fn set_view(&mut self, center: LatLng, zoom: f64);

    fn add_control(&mut self, control: Control) -> Result<()>;

    /// Replaces what an attached control displays
    fn update_control(&mut self, id: &str, content: ControlContent) -> Result<()>;

    fn add_attribution(&mut self, text: &str);

    /// Layer ids in draw order, bottom first
    fn layer_ids(&self) -> Vec<String>;
}

/// The page around the map: filter selects, search box and results table
pub trait ParkView {
    fn set_search_text(&mut self, text: &str);

    fn set_filter_options(&mut self, field: CategoricalField, options: &[FilterOption]);

    fn set_table_rows(&mut self, rows: &[TableRow]);

    /// `None` clears the message
    fn set_count_message(&mut self, message: Option<&str>);

    fn show_error(&mut self, message: &str);
}
