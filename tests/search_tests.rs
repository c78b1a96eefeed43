mod common;

use common::{FixtureSource, RecordingView};
use parkmap::{
    core::config::MapViewConfig, ui::table::TABLE_COLUMNS, HeadlessMap, ParkMapApp, Query,
    SearchOutcome, SearchPanel, TableRow,
};

fn no_parks_row() -> Vec<TableRow> {
    vec![TableRow::Message {
        text: "No parks found.".to_string(),
        colspan: 13,
    }]
}

/// Blank input shows the empty state without touching the network
#[tokio::test]
async fn test_blank_search_makes_no_request() {
    let source = FixtureSource::winnipeg();
    let mut panel = SearchPanel::new();
    let mut view = RecordingView::default();

    for raw in ["", "   ", "\t\n"] {
        let outcome = panel.search(&source, &mut view, raw).await;
        assert_eq!(outcome, SearchOutcome::EmptyInput);
    }

    assert_eq!(source.calls(), 0);
    assert_eq!(view.rows, no_parks_row());
    assert_eq!(view.count_message, None);
}

/// One match renders one row in column order, missing values empty
#[tokio::test]
async fn test_search_single_match() {
    let source = FixtureSource::winnipeg();
    let mut panel = SearchPanel::new();
    let mut view = RecordingView::default();

    let outcome = panel.search(&source, &mut view, "  Assiniboine ").await;

    assert_eq!(outcome, SearchOutcome::Found { count: 1 });
    assert_eq!(
        source.queries(),
        vec![Query::NameContains("Assiniboine".to_string())]
    );
    assert_eq!(view.count_message.as_deref(), Some("Found 1 parks."));
    assert_eq!(view.rows.len(), 1);

    let cells = view.rows[0].cells().unwrap();
    assert_eq!(cells.len(), TABLE_COLUMNS.len());
    assert_eq!(
        cells,
        &[
            "1001",
            "Assiniboine Park",
            "55 Pavilion Cres",
            "Regional Park",
            "",
            "Park",
            "CITY CENTRE",
            "RIVER HEIGHTS",
            "TUXEDO",
            "",
            "151.2",
            "149.9",
            "",
        ]
    );
}

/// Parks without geometry are still searchable
#[tokio::test]
async fn test_search_includes_unmapped_parks() {
    let source = FixtureSource::winnipeg();
    let mut panel = SearchPanel::new();
    let mut view = RecordingView::default();

    let outcome = panel.search(&source, &mut view, "median").await;

    assert_eq!(outcome, SearchOutcome::Found { count: 1 });
    assert_eq!(view.rows[0].cells().unwrap()[1], "Pembina Median");
}

#[tokio::test]
async fn test_search_without_matches() {
    let source = FixtureSource::winnipeg();
    let mut panel = SearchPanel::new();
    let mut view = RecordingView::default();

    panel.search(&source, &mut view, "park").await;
    assert!(view.count_message.is_some());

    let outcome = panel.search(&source, &mut view, "zzz").await;
    assert_eq!(outcome, SearchOutcome::NoResults);
    assert_eq!(view.rows, no_parks_row());
    assert_eq!(view.count_message, None);
    assert_eq!(source.calls(), 2);
}

/// A quote in the search text reaches the source intact
#[tokio::test]
async fn test_search_with_quote() {
    let source = FixtureSource::winnipeg();
    let mut panel = SearchPanel::new();
    let mut view = RecordingView::default();

    let outcome = panel.search(&source, &mut view, "st. mary's").await;

    assert_eq!(outcome, SearchOutcome::Found { count: 1 });
    assert_eq!(
        source.queries(),
        vec![Query::NameContains("st. mary's".to_string())]
    );
}

/// A failed search reports the error and keeps the rows already shown
#[tokio::test]
async fn test_failed_search_keeps_rows() {
    let mut panel = SearchPanel::new();
    let mut view = RecordingView::default();
    panel
        .search(&FixtureSource::winnipeg(), &mut view, "kildonan")
        .await;
    let shown = view.rows.clone();

    let outcome = panel
        .search(&FixtureSource::failing(500), &mut view, "kildonan")
        .await;

    match outcome {
        SearchOutcome::Failed { message } => {
            assert!(message.starts_with("Unable to load parks:"))
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(view.rows, shown);
    assert_eq!(panel.rows(), shown.as_slice());
    assert_eq!(view.errors.len(), 1);
}

/// Only the newest search is applied
#[tokio::test]
async fn test_stale_search_is_superseded() {
    let source = FixtureSource::winnipeg();
    let mut app = ParkMapApp::new(
        HeadlessMap::default(),
        RecordingView::default(),
        &MapViewConfig::default(),
    )
    .unwrap();

    let (first, first_query) = app.begin_search("park");
    let (second, second_query) = app.begin_search("kildonan");

    let outcome = app.complete_search(second, Ok(source.answer(&second_query.unwrap())));
    assert_eq!(outcome, SearchOutcome::Found { count: 1 });

    let late = app.complete_search(first, Ok(source.answer(&first_query.unwrap())));
    assert_eq!(late, SearchOutcome::Superseded);
    assert_eq!(app.view().rows.len(), 1);
    assert_eq!(app.view().count_message.as_deref(), Some("Found 1 parks."));
}

#[tokio::test]
async fn test_app_search_end_to_end() {
    let source = FixtureSource::winnipeg();
    let mut app = ParkMapApp::new(
        HeadlessMap::default(),
        RecordingView::default(),
        &MapViewConfig::default(),
    )
    .unwrap();

    assert_eq!(
        app.submit_search(&source, " ").await,
        SearchOutcome::EmptyInput
    );
    assert_eq!(source.calls(), 0);

    assert_eq!(
        app.submit_search(&source, "PARK").await,
        SearchOutcome::Found { count: 2 }
    );
    let names: Vec<&str> = app
        .search_panel()
        .rows()
        .iter()
        .map(|row| row.cells().unwrap()[1].as_str())
        .collect();
    assert_eq!(names, vec!["Assiniboine Park", "Kildonan Park"]);
}
