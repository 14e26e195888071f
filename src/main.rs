mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::AirfareDashApp;
use eframe::egui;
use state::AppState;

/// Fixed path of the processed DoT export; `generate_sample` can produce a
/// synthetic one. Load failure is fatal, no partial dashboard renders.
const DATA_PATH: &str = "us_airfares_processed.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let records = data::loader::load_csv(Path::new(DATA_PATH))
        .inspect_err(|e| log::error!("failed to load {DATA_PATH}: {e}"))
        .with_context(|| format!("loading {DATA_PATH}"))?;
    let table = data::normalize::normalize(records);
    log::info!(
        "loaded {} fare records spanning {}..={}",
        table.len(),
        table.year_min,
        table.year_max
    );

    let state = AppState::new(table, DATA_PATH.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Consumer Airfare Report",
        options,
        Box::new(move |_cc| Ok(Box::new(AirfareDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
