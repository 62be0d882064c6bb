//! Running all checks and collecting the outcome.

use serde::{Deserialize, Serialize};
use sonocat_model::{DatasetSchema, RecordSet};
use tracing::info;

use crate::checks;
use crate::issue::{Issue, Severity};

/// Similarity at or above which two categories are reported.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.70;

/// Options for [`validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Category similarity threshold in `0.0..=1.0`.
    pub similarity_threshold: f64,
    /// Column checked for DOI syntax, `None` to skip.
    pub doi_column: Option<String>,
    /// Also score substring matches, so `Cardiac` pairs with `Cardiac Imaging`.
    pub partial_matching: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            doi_column: Some("DOI".to_string()),
            partial_matching: false,
        }
    }
}

impl ValidationOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_partial_matching(mut self, enabled: bool) -> Self {
        self.partial_matching = enabled;
        self
    }
}

/// Outcome of validating one catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Number of data rows checked.
    pub rows_checked: usize,
    /// Issues in check order: structure, then rows, then categories.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity() == severity)
    }

    fn count(&self, severity: Severity) -> usize {
        self.by_severity(severity).count()
    }
}

/// Validate a loaded catalog against its schema.
///
/// Missing required columns are reported once, and every row is still
/// checked through whichever aliases the header does carry.
pub fn validate(
    records: &RecordSet,
    schema: &DatasetSchema,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut issues = checks::columns::check(records, schema);
    issues.extend(checks::rows::check(
        records,
        schema,
        options.doi_column.as_deref(),
    ));
    issues.extend(checks::categories::check(
        records,
        schema,
        options.similarity_threshold,
        options.partial_matching,
    ));

    let report = ValidationReport {
        rows_checked: records.len(),
        issues,
    };
    info!(
        rows = report.rows_checked,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation finished"
    );
    report
}
