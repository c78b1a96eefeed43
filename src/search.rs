//! Park name search and the results table.

use crate::{
    data::park::ParkFeature,
    query::{FeatureSource, Query},
    traits::ParkView,
    ui::table::{count_message, TableRow},
    ParkMapError,
};

/// What a search ended up showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input; nothing was fetched
    EmptyInput,
    NoResults,
    Found { count: usize },
    /// The fetch failed; the previous rows are still shown
    Failed { message: String },
    /// A newer search started before this one finished; nothing was applied
    Superseded,
}

/// Keeps the rows the results table currently shows
#[derive(Debug, Default)]
pub struct SearchPanel {
    rows: Vec<TableRow>,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query for raw search box text, or `None` when it is blank
    pub fn prepare(raw_query: &str) -> Option<Query> {
        let trimmed = raw_query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Query::NameContains(trimmed.to_string()))
        }
    }

    pub fn apply_empty_input<V: ParkView + ?Sized>(&mut self, view: &mut V) -> SearchOutcome {
        self.show_no_parks(view);
        SearchOutcome::EmptyInput
    }

    /// Shows one row per park, or the "No parks found." row
    pub fn apply_results<V: ParkView + ?Sized>(
        &mut self,
        view: &mut V,
        parks: &[ParkFeature],
    ) -> SearchOutcome {
        if parks.is_empty() {
            self.show_no_parks(view);
            return SearchOutcome::NoResults;
        }

        self.rows = parks.iter().map(TableRow::from_park).collect();
        let message = count_message(parks.len());
        view.set_count_message(Some(message.as_str()));
        view.set_table_rows(&self.rows);
        log::info!("search matched {} parks", parks.len());
        SearchOutcome::Found { count: parks.len() }
    }

    /// Reports a failed fetch and leaves the table as it was
    pub fn apply_failure<V: ParkView + ?Sized>(
        &mut self,
        view: &mut V,
        error: &ParkMapError,
    ) -> SearchOutcome {
        log::warn!("park search failed: {}", error);
        let message = format!("Unable to load parks: {}", error);
        view.show_error(&message);
        SearchOutcome::Failed { message }
    }

    /// Runs a name search end to end
    pub async fn search<S, V>(&mut self, source: &S, view: &mut V, raw_query: &str) -> SearchOutcome
    where
        S: FeatureSource + ?Sized,
        V: ParkView + ?Sized,
    {
        let Some(query) = Self::prepare(raw_query) else {
            return self.apply_empty_input(view);
        };

        match source.fetch_features(&query).await {
            Ok(parks) => self.apply_results(view, &parks),
            Err(err) => self.apply_failure(view, &err),
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    fn show_no_parks<V: ParkView + ?Sized>(&mut self, view: &mut V) {
        self.rows = vec![TableRow::no_parks()];
        view.set_count_message(None);
        view.set_table_rows(&self.rows);
    }
}
