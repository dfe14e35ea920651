//! Chartify Paste - JSON Data Array to Interactive Charts
//!
//! Paste a JSON array of `{ "name", "value" }` records and preview it as
//! bar, line, area, pie, composed, scatter and radar charts.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::ChartPasteApp;
use log::{error, info};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting Chartify Paste");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 860.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("Chartify Paste"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Chartify Paste",
        options,
        Box::new(|cc| Ok(Box::new(ChartPasteApp::new(cc)))),
    )
    .map_err(|e| {
        error!("Window failed: {}", e);
        anyhow::anyhow!("failed to start Chartify Paste: {}", e)
    })
}
