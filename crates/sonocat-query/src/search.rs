//! Single-predicate search primitives.
//!
//! Each primitive scans the full record slice it is given and returns the
//! matching records in name-sort order.

use sonocat_model::{DatasetSchema, FlagGroup, Record};

use crate::sort::sort_records;
use crate::tags::record_tags;

fn collect_sorted<'a>(matches: impl Iterator<Item = &'a Record>) -> Vec<&'a Record> {
    let mut matches: Vec<&Record> = matches.collect();
    sort_records(&mut matches);
    matches
}

/// Case-insensitive substring match against the display name only.
pub fn text_search<'a>(query: &str, records: &'a [Record]) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    collect_sorted(
        records
            .iter()
            .filter(|r| r.display_name().to_lowercase().contains(&needle)),
    )
}

/// Records with at least one tag in `column` equal to one of `values`.
pub fn tag_search<'a>(column: &str, values: &[&str], records: &'a [Record]) -> Vec<&'a Record> {
    collect_sorted(
        records
            .iter()
            .filter(|r| record_tags(r, column).iter().any(|tag| values.contains(tag))),
    )
}

/// Records whose raw `column` value equals one of `values` exactly.
pub fn value_search<'a>(column: &str, values: &[&str], records: &'a [Record]) -> Vec<&'a Record> {
    collect_sorted(
        records
            .iter()
            .filter(|r| r.get(column).is_some_and(|value| values.contains(&value))),
    )
}

/// Records whose `column` reads as true.
pub fn flag_search<'a>(
    column: &str,
    schema: &DatasetSchema,
    records: &'a [Record],
) -> Vec<&'a Record> {
    collect_sorted(
        records
            .iter()
            .filter(|r| r.get(column).is_some_and(|value| schema.is_truthy(value))),
    )
}

/// Records where any `"<group> - <identifier>"` column for the selected
/// identifiers reads as true.
pub fn flag_group_search<'a>(
    group: &FlagGroup,
    identifiers: &[&str],
    schema: &DatasetSchema,
    records: &'a [Record],
) -> Vec<&'a Record> {
    let columns: Vec<String> = identifiers.iter().map(|id| group.column(id)).collect();
    collect_sorted(records.iter().filter(|r| {
        columns
            .iter()
            .any(|column| r.get(column).is_some_and(|value| schema.is_truthy(value)))
    }))
}
