//! Required column presence.

use sonocat_model::{DatasetSchema, RecordSet};

use crate::issue::Issue;

/// Report every required column the header lacks, in schema order.
pub fn check(records: &RecordSet, schema: &DatasetSchema) -> Vec<Issue> {
    let missing: Vec<String> = schema
        .required_columns
        .iter()
        .filter(|column| !records.has_column(column))
        .cloned()
        .collect();

    if missing.is_empty() {
        Vec::new()
    } else {
        vec![Issue::MissingColumns { columns: missing }]
    }
}
