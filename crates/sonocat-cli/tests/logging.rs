//! Log file output. Kept in its own test binary because the subscriber is
//! global.

use sonocat_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

#[test]
fn test_json_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sonocat.log");
    let mut config = LogConfig::default()
        .with_level(LevelFilter::INFO)
        .with_format(LogFormat::Json)
        .with_log_file(Some(path.clone()));
    config.use_env_filter = false;
    init_logging(&config).unwrap();

    tracing::info!(target: "sonocat_ingest", rows = 5, "catalog loaded");
    tracing::debug!(target: "sonocat_ingest", "parse details");
    tracing::info!(target: "hyper", "outside the workspace");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("catalog loaded"));
    assert!(contents.contains("\"rows\":5"));
    assert!(!contents.contains("parse details"));
    assert!(!contents.contains("outside the workspace"));
}
