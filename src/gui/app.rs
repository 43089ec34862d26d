//! Postings Explorer Main Application
//! Main window with control panel and chart viewer.

use crate::charts::ChartTheme;
use crate::data::{self, DataSource};
use crate::export;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use anyhow::Context;
use egui::SidePanel;
use polars::prelude::DataFrame;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Load result from the background fetch thread
enum LoadResult {
    Progress(f32, String),
    Complete {
        sectors: Vec<String>,
        postings: DataFrame,
    },
    Error(String),
}

/// Main application window.
pub struct PostingsApp {
    source: DataSource,
    postings: Option<DataFrame>,
    theme: ChartTheme,

    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl PostingsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            source: DataSource::default(),
            postings: None,
            theme: ChartTheme::default(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        // Fetch immediately; the views stay empty until the data arrives.
        app.start_load();
        app
    }

    /// Kick off the sequential fetch chain on a background thread
    fn start_load(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        self.chart_viewer.clear();
        self.control_panel.export_enabled = false;
        self.control_panel.set_progress(0.0, "Loading data...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let source = self.source.clone();
        thread::spawn(move || {
            if let Err(e) = Self::run_load(&tx, &source) {
                tracing::warn!(error = %e, "data load failed");
                let _ = tx.send(LoadResult::Error(format!("{e:#}")));
            }
        });
    }

    /// Run the load chain (called from the background thread).
    /// The sector list resolves first; the postings fetch follows, so the
    /// initial render always has a selection to key on.
    fn run_load(tx: &Sender<LoadResult>, source: &DataSource) -> anyhow::Result<()> {
        let client = reqwest::blocking::Client::new();

        let _ = tx.send(LoadResult::Progress(10.0, "Fetching sector list...".to_string()));
        let sectors_raw =
            data::fetch_text(&client, &source.sectors_url).context("fetching sector list")?;
        let sectors = data::load_sectors(&sectors_raw).context("parsing sector list")?;

        let _ = tx.send(LoadResult::Progress(40.0, "Fetching postings data...".to_string()));
        let postings_raw =
            data::fetch_text(&client, &source.postings_url).context("fetching postings data")?;

        let _ = tx.send(LoadResult::Progress(70.0, "Parsing postings data...".to_string()));
        let postings =
            data::load_postings(&postings_raw).context("parsing postings data")?;

        tracing::info!(
            sectors = sectors.len(),
            rows = postings.height(),
            "data load complete"
        );
        let _ = tx.send(LoadResult::Complete { sectors, postings });
        Ok(())
    }

    /// Check for load results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(progress, status) => {
                        self.control_panel.set_progress(progress, &status);
                    }
                    LoadResult::Complete { sectors, postings } => {
                        let summary = format!(
                            "Loaded {} sectors, {} rows",
                            sectors.len(),
                            postings.height()
                        );
                        self.control_panel.update_sectors(sectors);
                        self.postings = Some(postings);
                        self.reproject();
                        self.control_panel.set_progress(100.0, &summary);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Recompute the projection for the selected sector and replace the views
    fn reproject(&mut self) {
        let Some(postings) = &self.postings else {
            return;
        };
        let sector = self.control_panel.selected_sector.clone();
        if sector.is_empty() {
            return;
        }

        let series = data::project_sector(postings, &sector);
        self.chart_viewer.set_series(sector, series);
        self.control_panel.export_enabled = !self.chart_viewer.series.is_empty();
    }

    /// Save the current table through a native file dialog
    fn handle_export_csv(&mut self) {
        if self.chart_viewer.series.is_empty() {
            self.control_panel.set_progress(0.0, "No data to export");
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(export::csv_file_name(&self.chart_viewer.sector))
            .save_file()
        else {
            return; // User cancelled
        };

        match export::write_csv(&path, &self.chart_viewer.series) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "table exported");
                self.control_panel
                    .set_progress(100.0, &format!("Exported {}", path.display()));
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Error: export failed: {}", e));
            }
        }
    }
}

impl eframe::App for PostingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::SectorChanged => self.reproject(),
                        ControlPanelAction::Reload => self.start_load(),
                        ControlPanelAction::ExportCsv => self.handle_export_csv(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        let theme = self.theme.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, &theme);
        });
    }
}
