//! CSV Export Module
//! Formats projected series as a month-by-year grid for display and download.

use crate::data::{YearSeries, MONTHS};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const CORNER_LABEL: &str = "Year/Month";

/// Header row plus one row per year; absent values are empty cells.
/// Feeds both the on-screen grid and the CSV download.
pub fn table_rows(series: &[YearSeries]) -> Vec<Vec<String>> {
    let mut header = Vec::with_capacity(13);
    header.push(CORNER_LABEL.to_string());
    header.extend(MONTHS.iter().map(|m| m.to_string()));

    let mut rows = Vec::with_capacity(series.len() + 1);
    rows.push(header);
    for year_series in series {
        let mut row = Vec::with_capacity(13);
        row.push(year_series.year.clone());
        row.extend(
            year_series
                .values
                .iter()
                .map(|v| v.map(|v| v.to_string()).unwrap_or_default()),
        );
        rows.push(row);
    }
    rows
}

/// Comma-separated text of the full table, with a trailing newline.
pub fn to_csv(series: &[YearSeries]) -> String {
    let mut text = table_rows(series)
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

/// Suggested download name for a sector's table.
pub fn csv_file_name(sector: &str) -> String {
    format!("{sector}_job_postings.csv")
}

/// Write the table to disk, replacing any file already at the path.
pub fn write_csv(path: &Path, series: &[YearSeries]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_csv(series).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<YearSeries> {
        let mut values = [None; 12];
        values[0] = Some(5.0);
        values[1] = Some(7.5);
        vec![YearSeries {
            year: "2021".to_string(),
            values,
        }]
    }

    #[test]
    fn header_row_is_corner_label_plus_months() {
        let rows = table_rows(&sample());
        assert_eq!(rows[0][0], "Year/Month");
        assert_eq!(rows[0][1], "Jan");
        assert_eq!(rows[0][12], "Dec");
        assert_eq!(rows[0].len(), 13);
    }

    #[test]
    fn absent_values_render_as_empty_cells() {
        let rows = table_rows(&sample());
        assert_eq!(rows[1][0], "2021");
        assert_eq!(rows[1][1], "5");
        assert_eq!(rows[1][2], "7.5");
        assert_eq!(rows[1][3], "");
        assert_eq!(rows[1].len(), 13);
    }

    #[test]
    fn csv_text_has_one_line_per_year_plus_header() {
        let csv = to_csv(&sample());
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Year/Month,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec");
        assert_eq!(lines[1], "2021,5,7.5,,,,,,,,,");
    }

    #[test]
    fn csv_round_trips_back_to_the_source_values() {
        let series = sample();
        let csv = to_csv(&series);

        let mut lines = csv.trim_end().lines();
        let header: Vec<&str> = lines.next().unwrap().split(',').collect();
        for (row, year_series) in lines.zip(&series) {
            let fields: Vec<&str> = row.split(',').collect();
            assert_eq!(fields[0], year_series.year);
            for (slot, field) in fields[1..].iter().enumerate() {
                assert_eq!(header[slot + 1], MONTHS[slot]);
                let reparsed = if field.is_empty() {
                    None
                } else {
                    Some(field.parse::<f64>().unwrap())
                };
                assert_eq!(reparsed, year_series.values[slot]);
            }
        }
    }

    #[test]
    fn file_name_follows_the_sector() {
        assert_eq!(csv_file_name("Retail"), "Retail_job_postings.csv");
    }
}
