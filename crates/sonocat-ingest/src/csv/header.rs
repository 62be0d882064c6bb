//! CSV header parsing and normalization.

/// Header row of a catalog CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Column names in file order (trimmed, duplicates kept).
    pub columns: Vec<String>,
}

impl CsvHeaders {
    /// Builds headers from raw header cells.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: cells
                .into_iter()
                .map(|c| normalize_header(c.as_ref()))
                .collect(),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if every column name is blank.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    /// Column names in file order with later duplicates removed.
    pub fn unique_columns(&self) -> Vec<String> {
        let mut unique: Vec<String> = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            if !unique.contains(column) {
                unique.push(column.clone());
            }
        }
        unique
    }

    /// Column names that appear more than once.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut duplicates = Vec::new();
        for (idx, column) in self.columns.iter().enumerate() {
            let repeated = self.columns[..idx].contains(column);
            if repeated && !duplicates.contains(&column.as_str()) {
                duplicates.push(column.as_str());
            }
        }
        duplicates
    }
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}
