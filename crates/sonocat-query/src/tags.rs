//! Comma-separated tag columns.
//!
//! The filter engine, facet derivation, and tag display all split tag
//! cells through [`split_tags`] so they agree on what a token is.

use serde::Serialize;
use sonocat_model::Record;

/// Tags shown inline before the rest collapse behind "+N more".
pub const DEFAULT_TAG_LIMIT: usize = 3;

/// Split a cell on commas, trim each token, and drop empty tokens.
pub fn split_tags(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokens of a record's tag column (empty when the cell is absent).
pub fn record_tags<'a>(record: &'a Record, column: &str) -> Vec<&'a str> {
    record.get(column).map(split_tags).unwrap_or_default()
}

/// Tags split into the inline part and the overflow part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagDisplay {
    pub visible: Vec<String>,
    pub overflow: Vec<String>,
}

impl TagDisplay {
    /// Show up to `limit` tokens inline.
    pub fn new(tokens: &[&str], limit: usize) -> Self {
        let split = limit.min(tokens.len());
        let (visible, overflow) = tokens.split_at(split);
        Self {
            visible: visible.iter().map(|t| (*t).to_string()).collect(),
            overflow: overflow.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Display for one record's tag column.
    pub fn for_record(record: &Record, column: &str, limit: usize) -> Self {
        Self::new(&record_tags(record, column), limit)
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.overflow.is_empty()
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// Label of the expand affordance, e.g. `+2 more`.
    pub fn overflow_label(&self) -> Option<String> {
        self.has_overflow()
            .then(|| format!("+{} more", self.overflow.len()))
    }

    /// Overflow tokens joined by `", "`.
    pub fn overflow_text(&self) -> String {
        self.overflow.join(", ")
    }

    /// All tokens in order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.visible
            .iter()
            .chain(self.overflow.iter())
            .map(String::as_str)
    }
}
