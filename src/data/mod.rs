//! Data module - CSV fetching, loading and series projection

mod fetch;
mod loader;
mod series;

pub use fetch::{fetch_text, DataSource, FetchError};
pub use loader::{load_postings, load_sectors, LoaderError};
pub use series::{project_sector, YearSeries, MONTHS};
