//! Catalog loading: fetch, parse, build records, sort.

use std::collections::BTreeMap;

use sonocat_model::{DatasetSchema, Record, RecordId, RecordSet};
use tracing::{debug, info, warn};

use crate::csv::{CsvTable, read_csv_bytes};
use crate::error::Result;
use crate::source::DatasetSource;

/// Loads the catalog, degrading to an empty record set on any failure.
///
/// Renderers treat the empty set exactly like "no matches"; the failure is
/// only reported through a `warn!` event.
pub async fn load(source: &DatasetSource, schema: &DatasetSchema) -> RecordSet {
    match try_load(source, schema).await {
        Ok(records) => records,
        Err(error) => {
            warn!(source = %source, %error, "catalog load failed, showing no datasets");
            RecordSet::empty()
        }
    }
}

/// Loads the catalog, surfacing fetch and parse errors.
pub async fn try_load(source: &DatasetSource, schema: &DatasetSchema) -> Result<RecordSet> {
    let bytes = source.fetch().await?;
    let records = parse_records(&bytes, schema)?;
    info!(
        source = %source,
        records = records.len(),
        columns = records.columns().len(),
        "loaded catalog"
    );
    Ok(records)
}

/// Parses CSV content into a sorted record set.
pub fn parse_records(bytes: &[u8], schema: &DatasetSchema) -> Result<RecordSet> {
    let table = read_csv_bytes(bytes)?;
    Ok(build_records(&table, schema))
}

/// Zips each data row with the header row.
///
/// Duplicate header names keep the last cell. Cells beyond the header width
/// are dropped; missing trailing cells leave the field absent.
pub fn build_records(table: &CsvTable, schema: &DatasetSchema) -> RecordSet {
    let columns = &table.headers.columns;

    let duplicates = table.headers.duplicates();
    if !duplicates.is_empty() {
        warn!(?duplicates, "duplicate header names, last column wins");
    }

    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            if row.len() > columns.len() {
                debug!(
                    row = index + 2,
                    cells = row.len(),
                    columns = columns.len(),
                    "ignoring cells beyond header width"
                );
            }
            let fields: BTreeMap<String, String> = columns
                .iter()
                .zip(row.iter())
                .map(|(column, cell)| (column.clone(), cell.clone()))
                .collect();
            Record::new(RecordId::new(index), fields, schema)
        })
        .collect();

    RecordSet::new(table.headers.unique_columns(), records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &RecordSet) -> Vec<&str> {
        set.iter().map(Record::display_name).collect()
    }

    #[test]
    fn test_parse_records_sorted() {
        let csv = b"Dataset Name,Link\nBanana,b\napple,a\nCherry,c\n";
        let set = parse_records(csv, &DatasetSchema::complete()).unwrap();

        assert_eq!(names(&set), vec!["Banana", "Cherry", "apple"]);
        assert_eq!(set.columns(), ["Dataset Name", "Link"]);
    }

    #[test]
    fn test_ids_follow_row_order() {
        let csv = b"Dataset Name\nZeta\nAlpha\n";
        let set = parse_records(csv, &DatasetSchema::complete()).unwrap();

        assert_eq!(set.records()[0].display_name(), "Alpha");
        assert_eq!(set.records()[0].id(), RecordId::new(1));
        assert_eq!(set.records()[1].id(), RecordId::new(0));
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let csv = b"Dataset Name,Licence,Licence\nA,first,second\n";
        let set = parse_records(csv, &DatasetSchema::complete()).unwrap();

        assert_eq!(set.records()[0].get("Licence"), Some("second"));
        assert_eq!(set.columns(), ["Dataset Name", "Licence"]);
    }

    #[test]
    fn test_short_row_leaves_fields_absent() {
        let csv = b"Dataset Name,Modalities,Licence\nA,US\n";
        let set = parse_records(csv, &DatasetSchema::complete()).unwrap();

        let record = &set.records()[0];
        assert_eq!(record.get("Modalities"), Some("US"));
        assert_eq!(record.get("Licence"), None);
    }

    #[test]
    fn test_long_row_truncated() {
        let csv = b"Dataset Name\nA,extra,cells\n";
        let set = parse_records(csv, &DatasetSchema::complete()).unwrap();
        assert_eq!(set.records()[0].fields().len(), 1);
    }

    #[test]
    fn test_header_only_is_empty() {
        let set = parse_records(b"Dataset Name,Modalities\n", &DatasetSchema::complete()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.columns().len(), 2);
    }

    #[test]
    fn test_snapshot_variant_names() {
        let csv = b"Name,URL,Data notes\nKidney,https://k.org,notes\n";
        let set = parse_records(csv, &DatasetSchema::snapshot()).unwrap();

        let record = &set.records()[0];
        assert_eq!(record.display_name(), "Kidney");
        assert_eq!(record.link(), Some("https://k.org"));
        assert_eq!(record.notes(), Some("notes"));
    }

    #[tokio::test]
    async fn test_load_degrades_to_empty() {
        let source = DatasetSource::Inline(Vec::new());
        let set = load(&source, &DatasetSchema::complete()).await;
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_try_load_surfaces_error() {
        let source = DatasetSource::Inline(Vec::new());
        let result = try_load(&source, &DatasetSchema::complete()).await;
        assert!(result.is_err());
    }
}
