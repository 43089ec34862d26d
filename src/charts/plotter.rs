//! Chart Plotter Module
//! Draws the monthly postings line chart using egui_plot.

use crate::data::{YearSeries, MONTHS};
use egui::Color32;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints, Points};

/// Chart styling owned by the caller and passed to every draw call.
#[derive(Debug, Clone)]
pub struct ChartTheme {
    /// Accessible palette cycled across year series.
    pub palette: [Color32; 5],
    pub month_labels: [&'static str; 12],
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            palette: [
                Color32::from_rgb(0x62, 0x88, 0xcd), // Blue
                Color32::from_rgb(0xef, 0x8d, 0x4b), // Orange
                Color32::from_rgb(0xb0, 0xb0, 0xb0), // Grey
                Color32::from_rgb(0x82, 0xb7, 0x5e), // Green
                Color32::from_rgb(0xff, 0xc7, 0x20), // Yellow
            ],
            month_labels: MONTHS,
        }
    }
}

/// Creates the interactive postings chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for a series by its position in the year order.
    pub fn series_color(theme: &ChartTheme, series_index: usize) -> Color32 {
        theme.palette[series_index % theme.palette.len()]
    }

    /// Contiguous runs of present values as (month index, value) points.
    /// An absent month breaks the line instead of interpolating across it.
    pub fn line_segments(values: &[Option<f64>; 12]) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();

        for (month_idx, value) in values.iter().enumerate() {
            match value {
                Some(v) => current.push([month_idx as f64, *v]),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Draw the line chart: month categories on x, posting counts on y,
    /// one line per year. Redrawing replaces the previous frame's output.
    pub fn draw_series_chart(
        ui: &mut egui::Ui,
        series: &[YearSeries],
        theme: &ChartTheme,
        height: f32,
    ) {
        let labels = theme.month_labels;

        Plot::new("postings_chart")
            .height(height)
            .legend(Legend::default())
            .x_axis_label("Month")
            .y_axis_label("Number of Job Postings")
            .include_y(0.0)
            .include_x(-0.5)
            .include_x(11.5)
            .allow_scroll(false)
            // one tick per month, none in between
            .x_grid_spacer(|_input| {
                (0..12)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < f64::EPSILON && idx < labels.len() {
                    labels[idx].to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (series_idx, year_series) in series.iter().enumerate() {
                    let color = Self::series_color(theme, series_idx);

                    for (segment_idx, segment) in
                        Self::line_segments(&year_series.values).into_iter().enumerate()
                    {
                        let points = PlotPoints::from_iter(segment.iter().copied());
                        let mut line = Line::new(points).color(color).width(2.0);
                        // one legend entry per year, not per segment
                        if segment_idx == 0 {
                            line = line.name(&year_series.year);
                        }
                        plot_ui.line(line);

                        plot_ui.points(
                            Points::new(PlotPoints::from_iter(segment.iter().copied()))
                                .radius(4.0)
                                .color(color),
                        );
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_split_the_line_into_segments() {
        let mut values = [None; 12];
        values[0] = Some(1.0);
        values[1] = Some(2.0);
        values[3] = Some(4.0);

        let segments = ChartPlotter::line_segments(&values);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], vec![[0.0, 1.0], [1.0, 2.0]]);
        assert_eq!(segments[1], vec![[3.0, 4.0]]);
    }

    #[test]
    fn all_absent_gives_no_segments() {
        let values = [None; 12];
        assert!(ChartPlotter::line_segments(&values).is_empty());
    }

    #[test]
    fn palette_cycles_after_five_series() {
        let theme = ChartTheme::default();
        assert_eq!(
            ChartPlotter::series_color(&theme, 0),
            ChartPlotter::series_color(&theme, 5)
        );
        assert_ne!(
            ChartPlotter::series_color(&theme, 0),
            ChartPlotter::series_color(&theme, 1)
        );
    }
}
