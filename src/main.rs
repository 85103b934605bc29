mod app;
mod cli;
mod color;
mod data;
mod events;
mod export;
mod state;
mod ui;

use anyhow::Context;
use app::LaunchDashApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();

    // A dataset named at startup must load; a bad file is fatal.
    let state = match &cli.dataset {
        Some(path) => {
            let dataset = data::loader::load_file(path)?;
            log::info!(
                "Loaded {} launches from {} sites",
                dataset.len(),
                dataset.catalog.len() - 1
            );
            let filters = cli.filter_state(&dataset);

            if let Some(out) = &cli.export {
                return export::write_snapshot(out, &dataset, &filters);
            }
            AppState::with_dataset(dataset, filters)
        }
        None => AppState::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the dashboard window")
}
