mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::PenguinDashApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is loaded exactly once, before the UI becomes interactive.
    // Failure here is fatal.
    let dataset = data::loader::load_embedded().context("loading bundled penguin dataset")?;
    log::info!("Loaded {} penguin records", dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    let state = AppState::new(dataset);
    eframe::run_native(
        "Penguins dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard UI: {e}"))?;

    Ok(())
}
