//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching or parsing the catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Fetch Errors ===
    /// HTTP request failed before a response arrived.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Content is not parseable CSV.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    /// Content has no rows at all.
    #[error("CSV content is empty")]
    EmptyCsv,

    /// First row has no usable column names.
    #[error("could not detect header row")]
    NoHeaderDetected,
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::CsvParse {
            message: err.to_string(),
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/catalog.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/catalog.csv");

        let err = IngestError::HttpStatus {
            url: "https://example.org/data.csv".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "fetching https://example.org/data.csv returned HTTP 404"
        );
    }

    #[test]
    fn test_error_from_csv() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&b"a,b\n1,2,3\n"[..]);
        let csv_err = reader
            .records()
            .find_map(std::result::Result::err)
            .unwrap();
        let ingest_err: IngestError = csv_err.into();
        assert!(matches!(ingest_err, IngestError::CsvParse { .. }));
    }
}
