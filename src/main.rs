//! Postings Explorer - Monthly Job Postings Viewer
//!
//! A Rust application that fetches sector job-postings CSVs and displays
//! interactive charts.

mod charts;
mod data;
mod export;
mod gui;

use eframe::egui;
use gui::PostingsApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Postings Explorer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Postings Explorer",
        options,
        Box::new(|cc| Ok(Box::new(PostingsApp::new(cc)))),
    )
}
