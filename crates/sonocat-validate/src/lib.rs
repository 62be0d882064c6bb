//! Consistency checks for the dataset catalog.
//!
//! Catches the mistakes that make a catalog row disappear from filters or
//! render blank: missing columns, rows without a name or link, malformed
//! URLs and DOIs, flag cells outside the accepted spellings, and category
//! tags that differ only by case or by a likely typo.
//!
//! # Example
//!
//! ```
//! use sonocat_model::{DatasetSchema, RecordSet};
//! use sonocat_validate::{ValidationOptions, validate};
//!
//! let schema = DatasetSchema::complete();
//! let report = validate(&RecordSet::empty(), &schema, &ValidationOptions::default());
//!
//! // An empty header misses every required column
//! assert!(report.has_errors());
//! ```

mod checks;
mod issue;
mod report;
mod similarity;

pub use issue::{Issue, Severity};
pub use report::{DEFAULT_SIMILARITY_THRESHOLD, ValidationOptions, ValidationReport, validate};
pub use similarity::{category_similarity, partial_similarity, token_sort};
