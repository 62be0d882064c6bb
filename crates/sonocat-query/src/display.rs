//! Per-record values shown by a table renderer.

use serde::Serialize;
use sonocat_model::{DatasetSchema, Record, RecordId};

use crate::tags::TagDisplay;

/// Shown in place of a missing display name.
pub const MISSING_NAME: &str = "-";
/// Link target used when a record has no link.
pub const MISSING_LINK: &str = "#";
/// Shown in place of a missing detail value.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagField {
    pub column: String,
    pub tags: TagDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub column: String,
    pub value: Option<String>,
}

impl DetailField {
    /// Value or `N/A`.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagField {
    pub column: String,
    /// Raw cell value (empty when absent).
    pub raw: String,
    pub available: bool,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetRow {
    pub id: RecordId,
    pub name: String,
    pub link: String,
    pub notes: Option<String>,
    pub tags: Vec<TagField>,
    pub values: Vec<DetailField>,
    pub details: Vec<DetailField>,
    pub flags: Vec<FlagField>,
}

impl DatasetRow {
    pub fn from_record(record: &Record, schema: &DatasetSchema, tag_limit: usize) -> Self {
        let name = if record.display_name().is_empty() {
            MISSING_NAME.to_string()
        } else {
            record.display_name().to_string()
        };

        let tags = schema
            .tag_columns
            .iter()
            .map(|column| TagField {
                column: column.clone(),
                tags: TagDisplay::for_record(record, column, tag_limit),
            })
            .collect();

        let detail = |column: &String| DetailField {
            column: column.clone(),
            value: record
                .get(column)
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string),
        };

        let flags = schema
            .flag_columns
            .iter()
            .map(|column| {
                let raw = record.value(column);
                FlagField {
                    column: column.clone(),
                    raw: raw.to_string(),
                    available: schema.is_truthy(raw),
                }
            })
            .collect();

        Self {
            id: record.id(),
            name,
            link: record.link().unwrap_or(MISSING_LINK).to_string(),
            notes: record.notes().map(str::to_string),
            tags,
            values: schema.value_columns.iter().map(detail).collect(),
            details: schema.detail_columns.iter().map(detail).collect(),
            flags,
        }
    }

    /// Names of the flag columns that read as true.
    pub fn available_flags(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|f| f.available)
            .map(|f| f.column.as_str())
    }
}
