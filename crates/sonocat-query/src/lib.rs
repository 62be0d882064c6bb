//! Filtering and search over a loaded catalog.
//!
//! Everything here is pure and synchronous. The engine re-scans the full
//! record set on every call; there is no caching or incremental update.
//!
//! # Module Organization
//!
//! - [`sort`]: The name-sort rule (code-point order, stable)
//! - [`search`]: Single-predicate search primitives
//! - [`engine`]: [`FilterEngine`] combining a query and column selections
//! - [`facets`]: Distinct option values for filter selectors
//! - [`tags`]: Comma-separated tag splitting and overflow display
//! - [`display`]: Per-record values a table renderer shows
//!
//! # Example
//!
//! ```
//! use sonocat_model::{DatasetSchema, FilterCriteria, RecordSet};
//! use sonocat_query::FilterEngine;
//!
//! let schema = DatasetSchema::complete();
//! let records = RecordSet::empty();
//! let criteria = FilterCriteria::new().with_query("breast");
//!
//! let visible = FilterEngine::new(&schema).filter(&records, &criteria);
//! assert!(visible.is_empty());
//! ```

pub mod display;
pub mod engine;
pub mod facets;
pub mod search;
pub mod sort;
pub mod tags;

pub use display::{DatasetRow, DetailField, FlagField, TagField};
pub use engine::{FilterEngine, filter};
pub use facets::FacetValues;
pub use sort::{name_sort, sort_records};
pub use tags::{DEFAULT_TAG_LIMIT, TagDisplay, record_tags, split_tags};
