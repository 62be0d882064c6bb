//! Option values for filter selectors.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use sonocat_model::{DatasetSchema, RecordSet};

use crate::tags::record_tags;

/// Distinct values per filterable column, derived from the current record
/// set. Every configured column has an entry, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetValues {
    columns: BTreeMap<String, BTreeSet<String>>,
}

impl FacetValues {
    /// Collect tag tokens, trimmed single values, and truthy flag-group
    /// identifiers.
    pub fn derive(records: &RecordSet, schema: &DatasetSchema) -> Self {
        let mut columns: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for column in &schema.tag_columns {
            let values = records
                .iter()
                .flat_map(|r| record_tags(r, column))
                .map(str::to_string)
                .collect();
            columns.insert(column.clone(), values);
        }

        for column in &schema.value_columns {
            let values = records
                .iter()
                .filter_map(|r| r.get(column))
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            columns.insert(column.clone(), values);
        }

        for group in &schema.flag_groups {
            let values = group
                .identifiers
                .iter()
                .filter(|id| {
                    let column = group.column(id);
                    records
                        .iter()
                        .any(|r| r.get(&column).is_some_and(|v| schema.is_truthy(v)))
                })
                .cloned()
                .collect();
            columns.insert(group.name.clone(), values);
        }

        Self { columns }
    }

    /// Values for one column, `None` when the schema does not filter on it.
    pub fn values(&self, column: &str) -> Option<&BTreeSet<String>> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether no column has any value.
    pub fn is_empty(&self) -> bool {
        self.columns.values().all(BTreeSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sonocat_model::{FlagGroup, Record, RecordId};

    use super::*;

    fn record(id: usize, pairs: &[(&str, &str)], schema: &DatasetSchema) -> Record {
        let fields: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Record::new(RecordId::new(id), fields, schema)
    }

    #[test]
    fn test_derive_tag_and_value_columns() {
        let schema = DatasetSchema::complete();
        let set = RecordSet::new(
            Vec::new(),
            vec![
                record(
                    0,
                    &[
                        ("Dataset Name", "A"),
                        ("Modalities", "US (2D), MR"),
                        ("Licence", " CC0 "),
                    ],
                    &schema,
                ),
                record(
                    1,
                    &[
                        ("Dataset Name", "B"),
                        ("Modalities", "A, B ,,C"),
                        ("Licence", ""),
                    ],
                    &schema,
                ),
            ],
        );

        let facets = FacetValues::derive(&set, &schema);
        let modalities: Vec<_> = facets
            .values("Modalities")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(modalities, vec!["A", "B", "C", "MR", "US (2D)"]);

        let licences: Vec<_> = facets.values("Licence").unwrap().iter().collect();
        assert_eq!(licences, vec!["CC0"]);

        assert!(facets.values("Clinical Application").unwrap().is_empty());
        assert!(facets.values("Subjects").is_none());
    }

    #[test]
    fn test_empty_record_set() {
        let schema = DatasetSchema::complete();
        let facets = FacetValues::derive(&RecordSet::empty(), &schema);

        assert!(facets.is_empty());
        for column in &schema.tag_columns {
            assert!(facets.values(column).unwrap().is_empty());
        }
    }

    #[test]
    fn test_flag_group_identifiers() {
        let mut schema = DatasetSchema::snapshot();
        schema.flag_groups.push(FlagGroup::new(
            "Imaging type",
            vec!["xray".to_string(), "ultrasound".to_string()],
        ));
        schema.tag_columns.retain(|c| c != "Imaging type");
        let set = RecordSet::new(
            Vec::new(),
            vec![record(
                0,
                &[("Name", "Liver"), ("Imaging type - ultrasound", "TRUE")],
                &schema,
            )],
        );

        let facets = FacetValues::derive(&set, &schema);
        let types: Vec<_> = facets.values("Imaging type").unwrap().iter().collect();
        assert_eq!(types, vec!["ultrasound"]);
    }

    #[test]
    fn test_serializes_as_map() {
        let schema = DatasetSchema::snapshot();
        let facets = FacetValues::derive(&RecordSet::empty(), &schema);
        let json = serde_json::to_value(&facets).unwrap();
        assert!(json.get("Area of body").is_some());
    }
}
