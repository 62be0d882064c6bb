//! Validation issue types.
//!
//! Each variant carries only the data its message needs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Breaks rendering or filtering of a row
    Error,
    /// Should review
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Structure checks
    /// Required columns absent from the header row
    MissingColumns { columns: Vec<String> },

    // Row checks (row numbers count the header as line 1)
    /// Row has no display name
    MissingName { row: usize },
    /// Row has no link
    MissingLink { row: usize },
    /// Link is not an http(s) URL
    InvalidUrl { row: usize, value: String },
    /// DOI present but malformed
    InvalidDoi { row: usize, value: String },
    /// Flag cell is not one of the accepted spellings
    InvalidFlag {
        row: usize,
        column: String,
        value: String,
    },

    // Category checks
    /// Same category spelled with different letter case
    CaseInconsistency {
        column: String,
        variants: Vec<String>,
    },
    /// Two categories similar enough to be a typo
    SimilarCategories {
        column: String,
        first: String,
        second: String,
        /// Similarity in percent.
        score: u8,
    },
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::CaseInconsistency { .. } | Issue::SimilarCategories { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Source row, for row-level issues.
    pub fn row(&self) -> Option<usize> {
        match self {
            Issue::MissingName { row }
            | Issue::MissingLink { row }
            | Issue::InvalidUrl { row, .. }
            | Issue::InvalidDoi { row, .. }
            | Issue::InvalidFlag { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// Column the issue concerns, when there is exactly one.
    pub fn column(&self) -> Option<&str> {
        match self {
            Issue::InvalidFlag { column, .. }
            | Issue::CaseInconsistency { column, .. }
            | Issue::SimilarCategories { column, .. } => Some(column),
            _ => None,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::MissingColumns { columns } => {
                format!("missing columns: {}", columns.join(", "))
            }
            Issue::MissingName { row } => format!("row {row}: missing display name"),
            Issue::MissingLink { row } => format!("row {row}: missing link"),
            Issue::InvalidUrl { row, value } => format!("row {row}: invalid URL '{value}'"),
            Issue::InvalidDoi { row, value } => {
                format!("row {row}: potentially invalid DOI '{value}'")
            }
            Issue::InvalidFlag { row, column, value } => format!(
                "row {row}: column '{column}' must be a yes/no value or empty, found '{value}'"
            ),
            Issue::CaseInconsistency { column, variants } => {
                format!("{column}: case inconsistencies [{}]", variants.join(", "))
            }
            Issue::SimilarCategories {
                column,
                first,
                second,
                score,
            } => format!("{column}: similar categories '{first}' and '{second}' ({score}%)"),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity().label(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert_eq!(Issue::MissingName { row: 2 }.severity(), Severity::Error);
        assert_eq!(
            Issue::CaseInconsistency {
                column: "Modalities".to_string(),
                variants: vec!["MR".to_string(), "mr".to_string()],
            }
            .severity(),
            Severity::Warning
        );
    }

    #[test]
    fn test_display() {
        let issue = Issue::InvalidUrl {
            row: 4,
            value: "www.example.org".to_string(),
        };
        assert_eq!(issue.to_string(), "error: row 4: invalid URL 'www.example.org'");
        assert_eq!(issue.row(), Some(4));
        assert_eq!(issue.column(), None);
    }

    #[test]
    fn test_similar_display() {
        let issue = Issue::SimilarCategories {
            column: "Clinical Application".to_string(),
            first: "Cardiac".to_string(),
            second: "Cardiak".to_string(),
            score: 86,
        };
        assert_eq!(
            issue.to_string(),
            "warning: Clinical Application: similar categories 'Cardiac' and 'Cardiak' (86%)"
        );
    }
}
