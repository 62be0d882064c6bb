//! The name-sort rule.

use sonocat_model::Record;

pub use sonocat_model::name_sort;

/// Stably sort records by display name.
pub fn sort_records(records: &mut [&Record]) {
    records.sort_by(|a, b| name_sort(a, b));
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sonocat_model::{DatasetSchema, RecordId};

    use super::*;

    fn named(id: usize, name: &str) -> Record {
        let mut fields = BTreeMap::new();
        fields.insert("Dataset Name".to_string(), name.to_string());
        Record::new(RecordId::new(id), fields, &DatasetSchema::complete())
    }

    #[test]
    fn test_code_point_order() {
        let records = [named(0, "Banana"), named(1, "apple"), named(2, "Cherry")];
        let mut refs: Vec<&Record> = records.iter().collect();
        sort_records(&mut refs);

        let names: Vec<_> = refs.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, vec!["Banana", "Cherry", "apple"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = [named(0, "Same"), named(1, "Same"), named(2, "Aardvark")];
        let mut refs: Vec<&Record> = records.iter().collect();
        sort_records(&mut refs);

        let ids: Vec<_> = refs.iter().map(|r| r.id().index()).collect();
        assert_eq!(ids, vec![2, 0, 1]);
    }

    #[test]
    fn test_missing_name_sorts_first() {
        let records = [named(0, "Alpha"), named(1, "")];
        let mut refs: Vec<&Record> = records.iter().collect();
        sort_records(&mut refs);
        assert_eq!(refs[0].display_name(), "");
    }
}
