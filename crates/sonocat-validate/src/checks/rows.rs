//! Per-row checks: name, link, DOI and flag spellings.
//!
//! Rows are reported by their line in the source file, counting the header
//! as line 1.

use std::sync::LazyLock;

use regex::Regex;
use sonocat_model::{DatasetSchema, Record, RecordSet};

use crate::issue::Issue;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("Invalid URL regex"));

/// Registrant prefix `10.NNNN` followed by a suffix of the characters
/// registries accept.
static DOI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^10\.\d{4,9}/[-._;()/:A-Z0-9\s]+$").expect("Invalid DOI regex")
});

/// Source line of a record.
pub fn source_row(record: &Record) -> usize {
    record.id().index() + 2
}

pub fn is_valid_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}

pub fn is_valid_doi(value: &str) -> bool {
    DOI_REGEX.is_match(value)
}

/// Check every record in file order.
///
/// Runs whether or not the header is complete. Names and links resolve
/// through their aliases and absent DOI or flag cells are not checked.
pub fn check(
    records: &RecordSet,
    schema: &DatasetSchema,
    doi_column: Option<&str>,
) -> Vec<Issue> {
    let mut ordered: Vec<&Record> = records.iter().collect();
    ordered.sort_by_key(|r| r.id());

    let mut issues = Vec::new();
    for record in ordered {
        check_record(record, schema, doi_column, &mut issues);
    }
    issues
}

fn check_record(
    record: &Record,
    schema: &DatasetSchema,
    doi_column: Option<&str>,
    issues: &mut Vec<Issue>,
) {
    let row = source_row(record);

    if record.display_name().trim().is_empty() {
        issues.push(Issue::MissingName { row });
    }

    match record.link().filter(|l| !l.trim().is_empty()) {
        None => issues.push(Issue::MissingLink { row }),
        Some(link) if !is_valid_url(link) => issues.push(Issue::InvalidUrl {
            row,
            value: link.to_string(),
        }),
        Some(_) => {}
    }

    if let Some(doi) = doi_column
        .and_then(|column| record.get(column))
        .filter(|v| !v.trim().is_empty())
        && !is_valid_doi(doi)
    {
        issues.push(Issue::InvalidDoi {
            row,
            value: doi.to_string(),
        });
    }

    for column in &schema.flag_columns {
        let Some(value) = record.get(column) else {
            continue;
        };
        if value.trim().is_empty() || schema.is_truthy(value) || schema.is_falsy(value) {
            continue;
        }
        issues.push(Issue::InvalidFlag {
            row,
            column: column.clone(),
            value: value.to_string(),
        });
    }
}
