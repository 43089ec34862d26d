//! Remote CSV Source Module
//! Downloads the sector list and postings CSVs over HTTP.

use thiserror::Error;

const SECTORS_CSV_URL: &str =
    "https://raw.githubusercontent.com/edshorthouse/lightcast/38699eda8b751e50d9c74c8784473c9b5cef8b47/dropdown.csv";
const POSTINGS_CSV_URL: &str =
    "https://raw.githubusercontent.com/edshorthouse/lightcast/741e6cc402bd252cd2c79981847f61eaef5daaa5/suffolk.csv";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// The pair of CSV endpoints the app reads from.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub sectors_url: String,
    pub postings_url: String,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            sectors_url: SECTORS_CSV_URL.to_string(),
            postings_url: POSTINGS_CSV_URL.to_string(),
        }
    }
}

/// Fetch a text resource. Non-success statuses are errors; no retries.
pub fn fetch_text(client: &reqwest::blocking::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let body = response.text()?;
    tracing::debug!(url, bytes = body.len(), "fetched CSV resource");
    Ok(body)
}
