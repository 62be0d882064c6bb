//! Dataset loading for the ultrasound dataset catalog.
//!
//! This crate fetches the catalog CSV (over HTTP or from disk), parses it,
//! and builds a name-sorted [`RecordSet`](sonocat_model::RecordSet).
//!
//! # Features
//!
//! - **Lenient loading**: [`load`] never fails; any error yields an empty
//!   record set and a `warn!` diagnostic
//! - **Strict loading**: [`try_load`] surfaces [`IngestError`]
//! - **Ragged rows**: short rows leave fields absent, long rows are truncated
//!
//! # Example
//!
//! ```ignore
//! use sonocat_ingest::{DatasetSource, load};
//! use sonocat_model::DatasetSchema;
//!
//! let source: DatasetSource = "public/data/ultrasound_dataset_complete.csv".parse()?;
//! let records = load(&source, &DatasetSchema::complete()).await;
//! println!("{} datasets", records.len());
//! ```

mod csv;
mod error;
mod loader;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{CsvHeaders, CsvTable, read_csv_bytes};

// === Loading ===
pub use loader::{build_records, load, parse_records, try_load};
pub use source::DatasetSource;
