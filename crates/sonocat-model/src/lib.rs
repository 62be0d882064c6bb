//! Data model for the open-access ultrasound dataset catalog.
//!
//! This crate provides the types shared by the loader, the filter engine,
//! and the validator:
//!
//! - [`record`]: Records parsed from one CSV row, with a stable [`RecordId`]
//!   and logical fields resolved once at load time
//! - [`schema`]: Per-variant [`DatasetSchema`] mapping logical fields to the
//!   header aliases a deployed CSV uses
//! - [`criteria`]: User-selected [`FilterCriteria`] (free-text query and
//!   column selections)
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use sonocat_model::{DatasetSchema, Record, RecordId, RecordSet};
//!
//! let schema = DatasetSchema::complete();
//! let mut fields = BTreeMap::new();
//! fields.insert("Dataset Name".to_string(), "Thyroid US".to_string());
//!
//! let record = Record::new(RecordId::new(0), fields, &schema);
//! let set = RecordSet::new(vec!["Dataset Name".to_string()], vec![record]);
//!
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.records()[0].display_name(), "Thyroid US");
//! ```

pub mod criteria;
mod error;
pub mod record;
pub mod schema;

// === Error Types ===
pub use error::{Result, SchemaError};

// === Records ===
pub use record::{Record, RecordId, RecordSet, name_sort};

// === Schema ===
pub use schema::{ColumnKind, DatasetSchema, FlagGroup, SchemaPreset};

// === Criteria ===
pub use criteria::FilterCriteria;
