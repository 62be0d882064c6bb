//! CSV parsing into header and data rows.

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A parsed CSV document: the header row and the raw data rows.
///
/// Rows keep their own length; ragged rows are resolved when records are
/// built against the headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: CsvHeaders,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Parses CSV content. The first row is the header.
///
/// Cell values are kept verbatim (no trimming) so exact-value filters see
/// what the file holds. Blank lines are skipped.
pub fn read_csv_bytes(bytes: &[u8]) -> Result<CsvTable> {
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);
    let mut records = reader.records();

    let header = records.next().ok_or(IngestError::EmptyCsv)??;
    let headers = CsvHeaders::new(header.iter());
    if headers.is_blank() {
        return Err(IngestError::NoHeaderDetected);
    }

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "parsed CSV content"
    );

    Ok(CsvTable { headers, rows })
}
