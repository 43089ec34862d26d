//! Series Projection Module
//! Pivots the row-major postings table into year-grouped, month-indexed
//! series for one sector.

use super::loader::cell_text;
use polars::prelude::*;

/// Canonical month order used for all series indexing.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Monthly values for one year, indexed by canonical month order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    pub year: String,
    pub values: [Option<f64>; 12],
}

/// Project the postings table into one series per year for the given sector.
///
/// The first column holds the year, the second the month abbreviation; the
/// schema is uniform across rows. Years appear in first-appearance order and
/// every series holds exactly twelve values. A (year, month) pair with no
/// matching row, an unparseable cell, or a missing sector column all yield
/// `None`. Duplicate (year, month) rows resolve to the first match.
///
/// Total over any loaded table: degenerate frames produce an empty vec.
pub fn project_sector(df: &DataFrame, sector: &str) -> Vec<YearSeries> {
    let columns = df.get_columns();
    let (Some(year_col), Some(month_col)) = (columns.first(), columns.get(1)) else {
        return Vec::new();
    };

    let height = df.height();
    let year_of: Vec<Option<String>> = (0..height).map(|i| cell_text(year_col, i)).collect();
    let month_of: Vec<Option<String>> = (0..height).map(|i| cell_text(month_col, i)).collect();

    // Sector column parsed once; unparseable cells become nulls.
    let sector_of: Option<Vec<Option<f64>>> = df.column(sector).ok().and_then(|col| {
        let cast = col.cast(&DataType::Float64).ok()?;
        let values = cast.f64().ok()?;
        Some(values.into_iter().collect())
    });

    // Distinct years in first-appearance order, not sorted.
    let mut years: Vec<String> = Vec::new();
    for year in year_of.iter().flatten() {
        if !years.iter().any(|seen| seen == year) {
            years.push(year.clone());
        }
    }

    years
        .into_iter()
        .map(|year| {
            let mut values = [None; 12];
            for (slot, month) in MONTHS.iter().enumerate() {
                // first row matching (year, month) wins
                let row = (0..height).find(|&i| {
                    year_of[i].as_deref() == Some(year.as_str())
                        && month_of[i].as_deref() == Some(*month)
                });
                values[slot] = row
                    .and_then(|i| sector_of.as_ref()?.get(i).copied().flatten())
                    .filter(|v| !v.is_nan());
            }
            YearSeries { year, values }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postings(year: Vec<&str>, month: Vec<&str>, tech: Vec<&str>) -> DataFrame {
        df!("Year" => year, "Month" => month, "Tech" => tech).unwrap()
    }

    #[test]
    fn two_months_of_one_year() {
        let df = postings(vec!["2021", "2021"], vec!["Jan", "Feb"], vec!["5", "7"]);
        let series = project_sector(&df, "Tech");

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].year, "2021");
        assert_eq!(series[0].values[0], Some(5.0));
        assert_eq!(series[0].values[1], Some(7.0));
        assert!(series[0].values[2..].iter().all(|v| v.is_none()));
    }

    #[test]
    fn one_series_per_distinct_year_in_first_appearance_order() {
        let df = postings(
            vec!["2022", "2021", "2022", "2021"],
            vec!["Jan", "Jan", "Feb", "Feb"],
            vec!["1", "2", "3", "4"],
        );
        let series = project_sector(&df, "Tech");

        let years: Vec<&str> = series.iter().map(|s| s.year.as_str()).collect();
        assert_eq!(years, vec!["2022", "2021"]);
        assert!(series.iter().all(|s| s.values.len() == 12));
    }

    #[test]
    fn months_are_reordered_to_canonical_order() {
        let df = postings(
            vec!["2021", "2021", "2021"],
            vec!["Dec", "Jan", "Jun"],
            vec!["12", "1", "6"],
        );
        let series = project_sector(&df, "Tech");

        assert_eq!(series[0].values[0], Some(1.0));
        assert_eq!(series[0].values[5], Some(6.0));
        assert_eq!(series[0].values[11], Some(12.0));
    }

    #[test]
    fn missing_pairs_are_absent_not_zero() {
        let df = postings(vec!["2021"], vec!["Mar"], vec!["9"]);
        let series = project_sector(&df, "Tech");

        assert_eq!(series[0].values[2], Some(9.0));
        for (slot, value) in series[0].values.iter().enumerate() {
            if slot != 2 {
                assert_eq!(*value, None);
            }
        }
    }

    #[test]
    fn duplicate_year_month_rows_take_the_first_match() {
        let df = postings(
            vec!["2021", "2021"],
            vec!["Jan", "Jan"],
            vec!["5", "99"],
        );
        let series = project_sector(&df, "Tech");

        assert_eq!(series[0].values[0], Some(5.0));
    }

    #[test]
    fn unknown_sector_column_gives_absent_values() {
        let df = postings(vec!["2021"], vec!["Jan"], vec!["5"]);
        let series = project_sector(&df, "Finance");

        assert_eq!(series.len(), 1);
        assert!(series[0].values.iter().all(|v| v.is_none()));
    }

    #[test]
    fn unparseable_cells_are_absent() {
        let df = postings(
            vec!["2021", "2021"],
            vec!["Jan", "Feb"],
            vec!["n/a", "7"],
        );
        let series = project_sector(&df, "Tech");

        assert_eq!(series[0].values[0], None);
        assert_eq!(series[0].values[1], Some(7.0));
    }

    #[test]
    fn unknown_month_labels_match_nothing() {
        let df = postings(vec!["2021"], vec!["January"], vec!["5"]);
        let series = project_sector(&df, "Tech");

        assert_eq!(series.len(), 1);
        assert!(series[0].values.iter().all(|v| v.is_none()));
    }

    #[test]
    fn numeric_source_columns_also_project() {
        let df = df!(
            "Year" => ["2021"],
            "Month" => ["Jan"],
            "Tech" => [5i64]
        )
        .unwrap();
        let series = project_sector(&df, "Tech");

        assert_eq!(series[0].values[0], Some(5.0));
    }
}
