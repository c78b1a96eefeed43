use anyhow::Context;
use parkmap::{
    filter::FilterOption, CategoricalField, HeadlessMap, HttpFeatureSource, ParkMapApp,
    ParkMapConfig, ParkView, SearchOutcome, TableRow,
};

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "PARKMAP_CONFIG";

/// Page stand-in that writes everything to the log
#[derive(Default)]
struct ConsoleView {
    rows: Vec<TableRow>,
}

impl ParkView for ConsoleView {
    fn set_search_text(&mut self, text: &str) {
        log::info!("search box: {}", text);
    }

    fn set_filter_options(&mut self, field: CategoricalField, options: &[FilterOption]) {
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        log::info!("{} options ({}): {}", field, options.len(), labels.join(", "));
    }

    fn set_table_rows(&mut self, rows: &[TableRow]) {
        self.rows = rows.to_vec();
    }

    fn set_count_message(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            log::info!("{}", message);
        }
    }

    fn show_error(&mut self, message: &str) {
        log::error!("{}", message);
    }
}

fn load_config() -> anyhow::Result<ParkMapConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => ParkMapConfig::from_path(&path)
            .with_context(|| format!("reading config from {}", path.to_string_lossy())),
        None => Ok(ParkMapConfig::default()),
    }
}

fn print_rows(rows: &[TableRow]) {
    for row in rows {
        match row {
            TableRow::Cells(cells) => println!("{}", cells.join(" | ")),
            TableRow::Message { text, .. } => println!("{}", text),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    parkmap::init_logging();

    let config = load_config()?;
    let source = HttpFeatureSource::new(&config.data).context("building feature source")?;
    let map = HeadlessMap::from_config(&config.map);

    let mut app = ParkMapApp::new(map, ConsoleView::default(), &config.map)?;
    let drawn = app
        .load(&source)
        .await
        .context("loading parks")?
        .unwrap_or_default();
    println!("Drew {} parks from {}", drawn, source.endpoint());

    let term: Vec<String> = std::env::args().skip(1).collect();
    if !term.is_empty() {
        let outcome = app.submit_search(&source, &term.join(" ")).await;
        if let SearchOutcome::Failed { message } = outcome {
            anyhow::bail!(message);
        }
        print_rows(&app.view().rows);
    }

    Ok(())
}
