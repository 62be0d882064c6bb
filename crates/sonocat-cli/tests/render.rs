//! Rendering catalog rows, facets and validation reports.

use sonocat_cli::render::{
    dataset_listing, dataset_table, facets_table, issues_table, tags_text, validation_summary,
};
use sonocat_ingest::parse_records;
use sonocat_model::{DatasetSchema, FilterCriteria};
use sonocat_query::{DEFAULT_TAG_LIMIT, DatasetRow, FacetValues, FilterEngine, TagDisplay};
use sonocat_validate::{Issue, ValidationReport};

const CATALOG: &[u8] =
    include_bytes!("../../sonocat-ingest/tests/fixtures/ultrasound_datasets.csv");

fn visible_rows(schema: &DatasetSchema, criteria: &FilterCriteria) -> Vec<DatasetRow> {
    let records = parse_records(CATALOG, schema).unwrap();
    FilterEngine::new(schema)
        .filter(&records, criteria)
        .into_iter()
        .map(|r| DatasetRow::from_record(r, schema, DEFAULT_TAG_LIMIT))
        .collect()
}

#[test]
fn test_tags_text() {
    let tags = TagDisplay::new(&["Prostate Cancer", "Oncology", "Urology", "Biopsy"], 3);
    assert_eq!(tags_text(&tags), "Prostate Cancer, Oncology, Urology (+1 more)");

    let short = TagDisplay::new(&["Cardiac"], 3);
    assert_eq!(tags_text(&short), "Cardiac");
}

#[test]
fn test_dataset_table_lists_visible_rows() {
    let schema = DatasetSchema::complete();
    let criteria = FilterCriteria::new().with_value("Licence", "CC BY 4.0");
    let rows = visible_rows(&schema, &criteria);

    let rendered = dataset_table(&rows, &schema).to_string();
    assert!(rendered.contains("HC18"));
    assert!(rendered.contains("brain-us"));
    assert!(!rendered.contains("CAMUS"));
    assert!(rendered.contains("Licence"));
}

#[test]
fn test_facets_table() {
    let schema = DatasetSchema::complete();
    let records = parse_records(CATALOG, &schema).unwrap();
    let rendered = facets_table(&FacetValues::derive(&records, &schema)).to_string();
    assert!(rendered.contains("Clinical Application"));
    assert!(rendered.contains("CC0"));
}

#[test]
fn test_validation_summary() {
    let report = ValidationReport {
        rows_checked: 1,
        issues: vec![
            Issue::MissingLink { row: 2 },
            Issue::CaseInconsistency {
                column: "Modalities".to_string(),
                variants: vec!["MR".to_string(), "mr".to_string()],
            },
            Issue::CaseInconsistency {
                column: "Clinical Application".to_string(),
                variants: vec!["Fetal".to_string(), "fetal".to_string()],
            },
        ],
    };
    insta::assert_snapshot!(validation_summary(&report), @"1 row checked: 1 error, 2 warnings");

    let rendered = issues_table(&report).to_string();
    assert!(rendered.contains("row 2: missing link"));
    assert!(rendered.contains("Modalities"));
}

#[test]
fn test_listing_without_matches() {
    let schema = DatasetSchema::complete();
    let rows = visible_rows(&schema, &FilterCriteria::new().with_query("zzz"));
    assert!(rows.is_empty());
    assert_eq!(dataset_listing(&rows, &schema, 5), "No results found.");
}

#[test]
fn test_listing_footer_counts_matches() {
    let schema = DatasetSchema::complete();
    let rows = visible_rows(&schema, &FilterCriteria::new().with_query("camus"));
    let listing = dataset_listing(&rows, &schema, 5);
    assert!(listing.contains("CAMUS"));
    assert!(listing.ends_with("\n1 of 5 datasets"));
}
