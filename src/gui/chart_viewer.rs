//! Chart Viewer Widget
//! Central panel showing the postings chart and the year-by-month table.

use crate::charts::{ChartPlotter, ChartTheme};
use crate::data::YearSeries;
use crate::export;
use egui::{RichText, ScrollArea};

const CHART_HEIGHT: f32 = 380.0;

/// Central display area. Holds the current projection; setting a new one
/// replaces everything previously shown.
pub struct ChartViewer {
    pub sector: String,
    pub series: Vec<YearSeries>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            sector: String::new(),
            series: Vec::new(),
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the display
    pub fn clear(&mut self) {
        self.sector.clear();
        self.series.clear();
    }

    /// Replace the displayed projection
    pub fn set_series(&mut self, sector: String, series: Vec<YearSeries>) {
        self.sector = sector;
        self.series = series;
    }

    /// Draw the chart card and table
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &ChartTheme) {
        if self.series.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .rounding(8.0)
                    .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!(
                                    "Monthly Job Postings for {}",
                                    self.sector
                                ))
                                .size(18.0)
                                .strong(),
                            );

                            ui.add_space(10.0);

                            ChartPlotter::draw_series_chart(
                                ui,
                                &self.series,
                                theme,
                                CHART_HEIGHT,
                            );

                            ui.add_space(15.0);

                            ui.label(RichText::new("Postings by Year").size(14.0).strong());
                            ui.add_space(5.0);
                            Self::draw_table(ui, &self.series);
                        });
                    });
            });
    }

    /// Year-by-month grid; absent values show as empty cells.
    fn draw_table(ui: &mut egui::Ui, series: &[YearSeries]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("postings_table")
                    .striped(true)
                    .min_col_width(48.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        let mut rows = export::table_rows(series).into_iter();

                        if let Some(header) = rows.next() {
                            for cell in header {
                                ui.label(RichText::new(cell).strong().size(11.0));
                            }
                            ui.end_row();
                        }

                        for row in rows {
                            for cell in row {
                                ui.label(RichText::new(cell).size(11.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
