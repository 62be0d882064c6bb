//! The filter/search engine.
//!
//! Each active criterion computes its matches from the *full* record set
//! through a search primitive, then narrows the running result to records
//! whose [`RecordId`] is among those matches. The running result always
//! keeps the record set's name-sort order.

use std::collections::HashSet;

use sonocat_model::{ColumnKind, DatasetSchema, FilterCriteria, Record, RecordId, RecordSet};
use tracing::debug;

use crate::search::{flag_group_search, flag_search, tag_search, text_search, value_search};

/// Applies [`FilterCriteria`] to a record set under one schema.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'s> {
    schema: &'s DatasetSchema,
}

impl<'s> FilterEngine<'s> {
    pub fn new(schema: &'s DatasetSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &DatasetSchema {
        self.schema
    }

    /// Visible subset of `records` for `criteria`.
    ///
    /// AND across keys, OR within one key's selected values. Keys with only
    /// empty-string selections are ignored.
    pub fn filter<'a>(&self, records: &'a RecordSet, criteria: &FilterCriteria) -> Vec<&'a Record> {
        if records.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<&Record> = records.iter().collect();
        if criteria.is_empty() {
            return results;
        }

        let all = records.records();

        if criteria.has_query() {
            narrow(&mut results, &text_search(&criteria.query, all));
        }

        for (key, values) in criteria.active_selections() {
            let matches = match self.schema.column_kind(key) {
                ColumnKind::Tag => tag_search(key, &values, all),
                ColumnKind::FlagGroup => match self.schema.flag_group(key) {
                    Some(group) => flag_group_search(group, &values, self.schema, all),
                    None => value_search(key, &values, all),
                },
                ColumnKind::Value | ColumnKind::Flag => value_search(key, &values, all),
            };
            narrow(&mut results, &matches);
        }

        for column in &criteria.flags {
            narrow(&mut results, &flag_search(column, self.schema, all));
        }

        debug!(
            total = records.len(),
            visible = results.len(),
            query = %criteria.query,
            "filtered catalog"
        );
        results
    }
}

/// Filter with a one-off engine.
pub fn filter<'a>(
    records: &'a RecordSet,
    criteria: &FilterCriteria,
    schema: &DatasetSchema,
) -> Vec<&'a Record> {
    FilterEngine::new(schema).filter(records, criteria)
}

/// Keep the running results whose identity is among `matches`.
fn narrow(results: &mut Vec<&Record>, matches: &[&Record]) {
    let ids: HashSet<RecordId> = matches.iter().map(|r| r.id()).collect();
    results.retain(|r| ids.contains(&r.id()));
}
