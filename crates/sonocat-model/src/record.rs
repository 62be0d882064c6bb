//! Catalog records and record sets.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::DatasetSchema;

/// Stable identifier assigned to a record at load time (0-based row order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(usize);

impl RecordId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the source row among the data rows.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One dataset entry: the CSV row keyed by header name.
///
/// Logical fields (display name, link, notes) are resolved against the
/// schema's alias chains when the record is built and never re-resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    display_name: String,
    link: Option<String>,
    notes: Option<String>,
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Build a record and resolve its logical fields.
    pub fn new(id: RecordId, fields: BTreeMap<String, String>, schema: &DatasetSchema) -> Self {
        let display_name = first_present(&fields, &schema.name)
            .unwrap_or_default()
            .to_string();
        let link = first_present(&fields, &schema.link).map(str::to_string);
        let notes = first_present(&fields, &schema.notes).map(str::to_string);
        Self {
            id,
            display_name,
            link,
            notes,
            fields,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Resolved display name, empty when no alias carries a value.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// All cells keyed by header name.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Raw cell value, `None` when the row had no cell for the column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Raw cell value with absent cells read as the empty string.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or_default()
    }

    /// First non-empty value among `aliases`.
    pub fn resolve(&self, aliases: &[String]) -> Option<&str> {
        first_present(&self.fields, aliases)
    }
}

fn first_present<'a>(fields: &'a BTreeMap<String, String>, aliases: &[String]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|alias| fields.get(alias))
        .map(String::as_str)
        .find(|value| !value.is_empty())
}

/// Order two records by display name using code-point comparison.
///
/// Uppercase letters sort before lowercase ones ("Banana" < "Cherry" <
/// "apple"). Callers rely on a stable sort to keep ties in input order.
pub fn name_sort(a: &Record, b: &Record) -> Ordering {
    a.display_name().cmp(b.display_name())
}

/// The loaded catalog: header columns and records sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Build a record set; records are stably sorted by [`name_sort`].
    pub fn new(columns: Vec<String>, mut records: Vec<Record>) -> Self {
        records.sort_by(name_sort);
        Self { columns, records }
    }

    /// A record set with no columns and no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Header columns in file order (duplicates collapsed).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by its load-time identifier.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
