//! CSV Data Loader Module
//! Parses fetched CSV text into sector lists and postings tables using Polars.

use polars::prelude::*;
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Sector list is empty")]
    NoSectors,
    #[error("Postings CSV has no data rows")]
    NoRows,
    #[error("Postings CSV needs year and month columns")]
    MissingTimeColumns,
}

/// Read CSV text with every column kept as a string.
fn read_all_str(raw: &str, has_header: bool) -> Result<DataFrame, LoaderError> {
    let df = CsvReadOptions::default()
        .with_has_header(has_header)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(raw.as_bytes()))
        .finish()?;
    Ok(df)
}

/// Cell text at a row index, with the quoting AnyValue adds stripped.
pub(crate) fn cell_text(col: &Column, idx: usize) -> Option<String> {
    let val = col.get(idx).ok()?;
    if val.is_null() {
        None
    } else {
        Some(val.to_string().trim_matches('"').to_string())
    }
}

/// Parse the headerless sector-list CSV.
///
/// Takes the first field of every row, drops empty or whitespace-only
/// entries, keeps source order and does not deduplicate. The list drives the
/// sector dropdown, so an empty result is an error.
pub fn load_sectors(raw: &str) -> Result<Vec<String>, LoaderError> {
    let df = read_all_str(raw, false)?;

    let Some(first_col) = df.get_columns().first() else {
        return Err(LoaderError::NoSectors);
    };

    let sectors: Vec<String> = (0..df.height())
        .filter_map(|i| {
            let name = cell_text(first_col, i)?;
            if name.trim().is_empty() {
                None
            } else {
                Some(name)
            }
        })
        .collect();

    if sectors.is_empty() {
        return Err(LoaderError::NoSectors);
    }

    tracing::debug!(count = sectors.len(), "parsed sector list");
    Ok(sectors)
}

/// Parse the headered postings CSV.
///
/// The first column is the year and the second the month abbreviation;
/// remaining columns hold per-sector counts as strings. The table must have
/// at least one data row so the projection can read the schema.
pub fn load_postings(raw: &str) -> Result<DataFrame, LoaderError> {
    let df = read_all_str(raw, true)?;

    if df.width() < 2 {
        return Err(LoaderError::MissingTimeColumns);
    }
    if df.height() == 0 {
        return Err(LoaderError::NoRows);
    }

    tracing::debug!(rows = df.height(), columns = df.width(), "parsed postings table");
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sectors_keep_order_and_drop_blanks() {
        let sectors = load_sectors("Tech\nRetail\n\n").unwrap();
        assert_eq!(sectors, vec!["Tech".to_string(), "Retail".to_string()]);
    }

    #[test]
    fn sectors_drop_whitespace_only_fields() {
        let sectors = load_sectors("Tech\n   \nHealth Care\n").unwrap();
        assert_eq!(sectors, vec!["Tech".to_string(), "Health Care".to_string()]);
    }

    #[test]
    fn sectors_are_not_deduplicated() {
        let sectors = load_sectors("Tech\nTech\nRetail\n").unwrap();
        assert_eq!(
            sectors,
            vec!["Tech".to_string(), "Tech".to_string(), "Retail".to_string()]
        );
    }

    #[test]
    fn blank_sector_list_is_an_error() {
        assert!(matches!(
            load_sectors("\n   \n"),
            Err(LoaderError::NoSectors)
        ));
    }

    #[test]
    fn postings_parse_keeps_schema_order() {
        let df = load_postings("Year,Month,Tech,Retail\n2021,Jan,5,3\n").unwrap();
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["Year", "Month", "Tech", "Retail"]);
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn header_only_postings_is_an_error() {
        assert!(matches!(
            load_postings("Year,Month,Tech\n"),
            Err(LoaderError::NoRows)
        ));
    }

    #[test]
    fn single_column_postings_is_an_error() {
        assert!(matches!(
            load_postings("Year\n2021\n"),
            Err(LoaderError::MissingTimeColumns)
        ));
    }
}
