//! Integration tests for loading catalog files from disk.

use std::io::Write;
use std::path::PathBuf;

use sonocat_ingest::{DatasetSource, IngestError, load, try_load};
use sonocat_model::{DatasetSchema, Record};
use tempfile::NamedTempFile;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ultrasound_datasets.csv")
}

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[tokio::test]
async fn test_load_fixture_sorted_by_name() {
    let source = DatasetSource::Path(fixture_path());
    let set = load(&source, &DatasetSchema::complete()).await;

    let names: Vec<_> = set.iter().map(Record::display_name).collect();
    assert_eq!(
        names,
        vec!["BUSI", "CAMUS", "HC18", "Prostate MRI-US Biopsy", "brain-us"]
    );
    assert_eq!(set.columns().len(), 15);
}

#[tokio::test]
async fn test_load_fixture_fields() {
    let source = DatasetSource::Path(fixture_path());
    let set = try_load(&source, &DatasetSchema::complete()).await.unwrap();

    let busi = &set.records()[0];
    assert_eq!(busi.get("Clinical Application"), Some("Breast Cancer, Oncology"));
    assert_eq!(busi.get("Licence"), Some("CC0"));
    assert_eq!(busi.notes(), Some("Benign and malignant breast lesions"));
    assert!(busi.link().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn test_load_missing_file_is_empty() {
    let source = DatasetSource::Path(PathBuf::from("/nonexistent/catalog.csv"));
    let set = load(&source, &DatasetSchema::complete()).await;
    assert!(set.is_empty());

    let result = try_load(&source, &DatasetSchema::complete()).await;
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[tokio::test]
async fn test_load_header_only_file() {
    let file = create_temp_csv("Dataset Name,Modalities,Clinical Application\n");
    let source = DatasetSource::Path(file.path().to_path_buf());

    let set = try_load(&source, &DatasetSchema::complete()).await.unwrap();
    assert!(set.is_empty());
}

#[tokio::test]
async fn test_load_from_parsed_path_string() {
    let path = fixture_path();
    let source: DatasetSource = path.to_str().unwrap().parse().unwrap();

    let set = load(&source, &DatasetSchema::complete()).await;
    assert_eq!(set.len(), 5);
}
