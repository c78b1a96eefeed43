//! Turns park records into styled overlays and reacts to pointer events on them.

use crate::{
    constants::INFO_CONTROL_ID,
    core::config::MapViewConfig,
    data::park::ParkFeature,
    layers::{
        style::{color_for_area, Color, PolygonStyle},
        tile::{TileLayer, TileLayerOptions},
        vector::OverlayLayer,
    },
    prelude::HashMap,
    traits::{MapWidget, ParkView},
    ui::controls::{InfoPanel, Legend},
    Result,
};

/// Which overlay the pointer entered last and which one is highlighted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    /// Overlay most recently entered; kept after the pointer leaves it
    last: Option<String>,
    /// Overlay currently drawn with the highlight style
    highlighted: Option<String>,
}

impl HoverState {
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    fn enter(&mut self, overlay_id: &str) {
        self.last = Some(overlay_id.to_string());
        self.highlighted = Some(overlay_id.to_string());
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

struct DrawnPark {
    park: ParkFeature,
    fill: Color,
}

/// Owns the park overlays on one map
///
/// Only layers this renderer created are ever removed, so the tile layer
/// and anything else on the map survive a redraw.
#[derive(Default)]
pub struct ParkRenderer {
    /// Bumped on every render so overlay ids never repeat
    generation: u64,
    order: Vec<String>,
    drawn: HashMap<String, DrawnPark>,
    hover: HoverState,
    attached: bool,
}

impl ParkRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets up the base map: tiles, initial view, info panel, legend and data credit
    pub fn attach<M: MapWidget + ?Sized>(
        &mut self,
        map: &mut M,
        config: &MapViewConfig,
    ) -> Result<()> {
        map.add_tile_layer(TileLayer::new(
            crate::constants::TILE_LAYER_ID.to_string(),
            TileLayerOptions::from_view_config(config),
        ))?;
        map.set_view(config.center, config.zoom);
        map.add_control(InfoPanel::control())?;
        map.add_control(Legend::control())?;
        if !config.data_attribution.is_empty() {
            map.add_attribution(&config.data_attribution);
        }
        self.attached = true;
        Ok(())
    }

    /// Replaces every overlay this renderer drew with one per drawable park.
    ///
    /// Returns the number of overlays drawn. Parks without usable geometry
    /// are skipped.
    pub fn render<M: MapWidget + ?Sized>(
        &mut self,
        map: &mut M,
        parks: &[ParkFeature],
    ) -> Result<usize> {
        self.clear(map)?;
        self.generation += 1;

        for park in parks {
            let Some(geometry) = park.geometry.as_ref().filter(|g| g.is_drawable()) else {
                log::debug!("skipping park '{}' without geometry", park.id);
                continue;
            };

            let id = format!("overlay-{}-{}", self.generation, self.order.len());
            let fill = color_for_area(park.area_hectares);
            map.add_overlay(OverlayLayer::new(
                id.clone(),
                park.name.clone(),
                park.id.clone(),
                geometry.clone(),
                PolygonStyle::base(fill),
            ))?;

            self.order.push(id.clone());
            self.drawn.insert(
                id,
                DrawnPark {
                    park: park.clone(),
                    fill,
                },
            );
        }

        log::info!("rendered {} of {} parks", self.order.len(), parks.len());
        Ok(self.order.len())
    }

    /// Removes this renderer's overlays and forgets the hover state
    pub fn clear<M: MapWidget + ?Sized>(&mut self, map: &mut M) -> Result<()> {
        for id in self.order.drain(..) {
            map.remove_layer(&id);
        }
        self.drawn.clear();
        self.hover.clear();
        if self.attached {
            map.update_control(INFO_CONTROL_ID, InfoPanel::placeholder())?;
        }
        Ok(())
    }

    /// Pointer entered an overlay: highlight it, raise it, show its details
    /// and copy its name into the search box.
    ///
    /// Returns `false` for overlays this renderer does not own.
    pub fn on_hover<M, V>(&mut self, map: &mut M, view: &mut V, overlay_id: &str) -> Result<bool>
    where
        M: MapWidget + ?Sized,
        V: ParkView + ?Sized,
    {
        let Some(entered) = self.drawn.get(overlay_id) else {
            return Ok(false);
        };
        let fill = entered.fill;
        let info = InfoPanel::for_park(&entered.park);
        let name = entered.park.name.clone();

        if let Some(stale) = self.hover.highlighted.take() {
            if stale != overlay_id {
                self.reset_style(map, &stale)?;
            }
        }

        map.set_overlay_style(overlay_id, PolygonStyle::highlight(fill))?;
        map.bring_to_front(overlay_id)?;
        self.hover.enter(overlay_id);

        if self.attached {
            map.update_control(INFO_CONTROL_ID, info)?;
        }
        view.set_search_text(&name);
        Ok(true)
    }

    /// Pointer left an overlay: restore its base style and keep showing the
    /// park entered last, or the placeholder when none was.
    pub fn on_hover_end<M: MapWidget + ?Sized>(
        &mut self,
        map: &mut M,
        overlay_id: &str,
    ) -> Result<bool> {
        if !self.drawn.contains_key(overlay_id) {
            return Ok(false);
        }

        self.reset_style(map, overlay_id)?;
        if self.hover.highlighted.as_deref() == Some(overlay_id) {
            self.hover.highlighted = None;
        }

        if self.attached {
            let content = self
                .hover
                .last
                .as_ref()
                .and_then(|last| self.drawn.get(last))
                .map(|drawn| InfoPanel::for_park(&drawn.park))
                .unwrap_or_else(InfoPanel::placeholder);
            map.update_control(INFO_CONTROL_ID, content)?;
        }
        Ok(true)
    }

    /// Zooms the map to the clicked park
    pub fn on_click<M: MapWidget + ?Sized>(&self, map: &mut M, overlay_id: &str) -> bool {
        let Some(bounds) = self
            .drawn
            .get(overlay_id)
            .and_then(|drawn| drawn.park.bounds())
        else {
            return false;
        };
        map.fit_bounds(&bounds);
        true
    }

    fn reset_style<M: MapWidget + ?Sized>(&self, map: &mut M, overlay_id: &str) -> Result<()> {
        match self.drawn.get(overlay_id) {
            Some(drawn) => map.set_overlay_style(overlay_id, PolygonStyle::base(drawn.fill)),
            None => Ok(()),
        }
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    /// Overlay ids from the latest render, in draw order
    pub fn overlay_ids(&self) -> &[String] {
        &self.order
    }

    pub fn park_for(&self, overlay_id: &str) -> Option<&ParkFeature> {
        self.drawn.get(overlay_id).map(|drawn| &drawn.park)
    }

    /// Overlay drawn for the park with `park_id`
    pub fn overlay_for_park(&self, park_id: &str) -> Option<&str> {
        self.order
            .iter()
            .find(|id| {
                self.drawn
                    .get(id.as_str())
                    .map_or(false, |drawn| drawn.park.id == park_id)
            })
            .map(String::as_str)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
