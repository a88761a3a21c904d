mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;

use app::AirportDashApp;
use config::DashboardConfig;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    let table = data::loader::load_file(&config.data_path)
        .inspect_err(|e| log::error!("Failed to load {}: {e}", config.data_path.display()))
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    log::info!(
        "Loaded {} airports from {} ({} rows skipped)",
        table.len(),
        config.data_path.display(),
        table.skipped_rows()
    );

    let state = AppState::new(table, config.data_path.clone());
    let options = config.native_options();
    let title = config.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(AirportDashApp::new(state, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
