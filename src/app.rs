//! Wires the renderer, filters and search to a map widget, a page and a
//! feature source.
//!
//! Every fetch is split into a `begin_*` step, which takes a request token,
//! and a `complete_*` step, which applies the response only while that token
//! is still the newest of its stream. The `load`, `submit_filter` and
//! `submit_search` helpers run both steps around one fetch.

use crate::{
    core::config::MapViewConfig,
    data::park::ParkFeature,
    filter::FilterController,
    query::{FeatureSource, Query},
    renderer::ParkRenderer,
    search::{SearchOutcome, SearchPanel},
    sequence::{RequestSequencer, RequestStream, RequestToken},
    traits::{MapWidget, ParkView},
    Result,
};

pub struct ParkMapApp<M: MapWidget, V: ParkView> {
    map: M,
    view: V,
    renderer: ParkRenderer,
    filters: FilterController,
    search: SearchPanel,
    sequencer: RequestSequencer,
}

impl<M: MapWidget, V: ParkView> ParkMapApp<M, V> {
    /// Attaches tiles, controls and the initial view to `map`
    pub fn new(mut map: M, view: V, config: &MapViewConfig) -> Result<Self> {
        let mut renderer = ParkRenderer::new();
        renderer.attach(&mut map, config)?;
        Ok(Self {
            map,
            view,
            renderer,
            filters: FilterController::new(),
            search: SearchPanel::new(),
            sequencer: RequestSequencer::new(),
        })
    }

    /// Initial load: one unfiltered fetch feeds both the filter options and
    /// the map. Returns the number of overlays drawn, or `None` when a newer
    /// map request finished first.
    pub async fn load<S: FeatureSource + ?Sized>(&mut self, source: &S) -> Result<Option<usize>> {
        let options_token = self.sequencer.begin(RequestStream::Options);
        let map_token = self.sequencer.begin(RequestStream::Map);

        let result = source.fetch_features(&Query::All).await;
        if let Ok(parks) = &result {
            self.complete_options_request(options_token, parks);
        }
        self.complete_map_request(map_token, result)
    }

    pub fn begin_map_request(&mut self) -> RequestToken {
        self.sequencer.begin(RequestStream::Map)
    }

    /// Redraws the map from a finished fetch.
    ///
    /// A stale response is dropped with `Ok(None)`. A failed current fetch is
    /// reported to the page and returned; the drawn overlays stay as they are.
    pub fn complete_map_request(
        &mut self,
        token: RequestToken,
        result: Result<Vec<ParkFeature>>,
    ) -> Result<Option<usize>> {
        if !self.sequencer.is_current(&token) {
            log::warn!("discarding stale response for {}", token);
            return Ok(None);
        }

        match result {
            Ok(parks) => self.renderer.render(&mut self.map, &parks).map(Some),
            Err(err) => {
                log::warn!("park load failed: {}", err);
                self.view
                    .show_error(&format!("Unable to load parks: {}", err));
                Err(err)
            }
        }
    }

    pub fn begin_options_request(&mut self) -> RequestToken {
        self.sequencer.begin(RequestStream::Options)
    }

    /// Rebuilds and publishes the filter options; returns false for a stale token
    pub fn complete_options_request(&mut self, token: RequestToken, parks: &[ParkFeature]) -> bool {
        if !self.sequencer.is_current(&token) {
            log::warn!("discarding stale response for {}", token);
            return false;
        }
        self.filters.load_options(parks, &mut self.view);
        true
    }

    /// Turns a filter selection into a map request.
    ///
    /// An unknown kind or a missing value is reported to the page and
    /// returned as an error; no request is started and the map is unchanged.
    pub fn begin_filter(
        &mut self,
        kind: &str,
        value: Option<&str>,
    ) -> Result<(RequestToken, Query)> {
        match self.filters.query_for(kind, value) {
            Ok(query) => Ok((self.begin_map_request(), query)),
            Err(err) => {
                self.view.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Fetches the parks matching a filter selection and redraws the map
    pub async fn submit_filter<S: FeatureSource + ?Sized>(
        &mut self,
        source: &S,
        kind: &str,
        value: Option<&str>,
    ) -> Result<Option<usize>> {
        let (token, query) = self.begin_filter(kind, value)?;
        let result = source.fetch_features(&query).await;
        self.complete_map_request(token, result)
    }

    /// Starts a search. Blank input is settled at once: the empty state is
    /// shown and no query is returned.
    pub fn begin_search(&mut self, raw_query: &str) -> (RequestToken, Option<Query>) {
        let token = self.sequencer.begin(RequestStream::Search);
        let query = SearchPanel::prepare(raw_query);
        if query.is_none() {
            self.search.apply_empty_input(&mut self.view);
        }
        (token, query)
    }

    pub fn complete_search(
        &mut self,
        token: RequestToken,
        result: Result<Vec<ParkFeature>>,
    ) -> SearchOutcome {
        if !self.sequencer.is_current(&token) {
            log::warn!("discarding stale response for {}", token);
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(parks) => self.search.apply_results(&mut self.view, &parks),
            Err(err) => self.search.apply_failure(&mut self.view, &err),
        }
    }

    pub async fn submit_search<S: FeatureSource + ?Sized>(
        &mut self,
        source: &S,
        raw_query: &str,
    ) -> SearchOutcome {
        let (token, query) = self.begin_search(raw_query);
        let Some(query) = query else {
            return SearchOutcome::EmptyInput;
        };
        let result = source.fetch_features(&query).await;
        self.complete_search(token, result)
    }

    pub fn hover(&mut self, overlay_id: &str) -> Result<bool> {
        self.renderer
            .on_hover(&mut self.map, &mut self.view, overlay_id)
    }

    pub fn hover_end(&mut self, overlay_id: &str) -> Result<bool> {
        self.renderer.on_hover_end(&mut self.map, overlay_id)
    }

    pub fn click(&mut self, overlay_id: &str) -> bool {
        self.renderer.on_click(&mut self.map, overlay_id)
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn renderer(&self) -> &ParkRenderer {
        &self.renderer
    }

    pub fn filters(&self) -> &FilterController {
        &self.filters
    }

    pub fn search_panel(&self) -> &SearchPanel {
        &self.search
    }

    /// Consumes the app, handing back its collaborators
    pub fn into_parts(self) -> (M, V) {
        (self.map, self.view)
    }
}
