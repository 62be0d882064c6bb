//! User-selected filter criteria.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Free-text query plus per-column selections.
///
/// Empty strings are the "unset" sentinel of a filter selector: an absent
/// key, an empty value list, or a list holding only empty strings never
/// constrains the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the display name.
    pub query: String,
    /// Selected values keyed by column (or flag group) name.
    pub selections: BTreeMap<String, Vec<String>>,
    /// Flag columns that must read as true.
    pub flags: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Add one selected value to a key.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.selections
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Require a flag column to be true.
    #[must_use]
    pub fn with_flag(mut self, column: impl Into<String>) -> Self {
        self.flags.insert(column.into());
        self
    }

    /// Replace a key's selection with a single value, as a dropdown does.
    /// Selecting `""` clears the key.
    pub fn select(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.selections.insert(key.into(), vec![value.into()]);
    }

    /// Remove a key's selection entirely.
    pub fn clear(&mut self, key: &str) {
        self.selections.remove(key);
    }

    /// Whether a non-empty query is set.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Non-empty selected values for a key.
    pub fn active_values(&self, key: &str) -> Vec<&str> {
        self.selections
            .get(key)
            .map(|values| active(values))
            .unwrap_or_default()
    }

    /// Keys with at least one non-empty selected value, in key order.
    pub fn active_selections(&self) -> impl Iterator<Item = (&str, Vec<&str>)> {
        self.selections
            .iter()
            .map(|(key, values)| (key.as_str(), active(values)))
            .filter(|(_, values)| !values.is_empty())
    }

    /// Whether nothing constrains the result.
    pub fn is_empty(&self) -> bool {
        !self.has_query() && self.flags.is_empty() && self.active_selections().next().is_none()
    }
}

fn active(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FilterCriteria::new().is_empty());
    }

    #[test]
    fn test_empty_sentinel_is_inactive() {
        let mut criteria = FilterCriteria::new();
        criteria.select("Licence", "");

        assert!(criteria.is_empty());
        assert!(criteria.active_values("Licence").is_empty());
        assert_eq!(criteria.active_selections().count(), 0);
    }

    #[test]
    fn test_active_values_skip_empty_entries() {
        let criteria = FilterCriteria::new()
            .with_value("Modalities", "")
            .with_value("Modalities", "US (2D)");

        assert_eq!(criteria.active_values("Modalities"), vec!["US (2D)"]);
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_select_replaces_previous_value() {
        let mut criteria = FilterCriteria::new().with_value("Licence", "CC BY 4.0");
        criteria.select("Licence", "CC0");
        assert_eq!(criteria.active_values("Licence"), vec!["CC0"]);

        criteria.clear("Licence");
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_query_and_flags_activate() {
        assert!(!FilterCriteria::new().with_query("thyroid").is_empty());
        assert!(!FilterCriteria::new().with_flag("Open access").is_empty());
    }

    #[test]
    fn test_deserialize_from_json() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"query": "breast", "selections": {"Licence": ["CC0"]}}"#,
        )
        .unwrap();
        assert_eq!(criteria.query, "breast");
        assert_eq!(criteria.active_values("Licence"), vec!["CC0"]);
        assert!(criteria.flags.is_empty());
    }
}
