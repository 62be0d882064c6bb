//! Terminal tables for catalog rows, facets and validation reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use sonocat_model::DatasetSchema;
use sonocat_query::{DatasetRow, FacetValues, TagDisplay};
use sonocat_validate::{Severity, ValidationReport};

/// Printed instead of a table when no record matches.
pub const NO_RESULTS: &str = "No results found.";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// One line per visible record, columns in schema order.
pub fn dataset_table(rows: &[DatasetRow], schema: &DatasetSchema) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Name"), header_cell("Link")];
    header.extend(schema.tag_columns.iter().map(|c| header_cell(c)));
    header.extend(schema.value_columns.iter().map(|c| header_cell(c)));
    header.extend(schema.detail_columns.iter().map(|c| header_cell(c)));
    header.push(header_cell("Available"));
    table.set_header(header);
    apply_table_style(&mut table);

    for row in rows {
        let mut cells = vec![
            Cell::new(&row.name).add_attribute(Attribute::Bold),
            Cell::new(&row.link),
        ];
        cells.extend(row.tags.iter().map(|field| tags_cell(&field.tags)));
        cells.extend(
            row.values
                .iter()
                .chain(&row.details)
                .map(|field| match &field.value {
                    Some(value) => Cell::new(value),
                    None => dim_cell(field.text()),
                }),
        );
        let available: Vec<&str> = row.available_flags().collect();
        cells.push(if available.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(available.join("\n")).fg(Color::Green)
        });
        table.add_row(cells);
    }
    table
}

/// The table plus a `3 of 12 datasets` footer, or [`NO_RESULTS`] when
/// nothing matched.
pub fn dataset_listing(rows: &[DatasetRow], schema: &DatasetSchema, total: usize) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }
    format!(
        "{}\n{} of {total} datasets",
        dataset_table(rows, schema),
        rows.len()
    )
}

/// Inline tags followed by the overflow label, e.g. `A, B, C (+2 more)`.
pub fn tags_text(tags: &TagDisplay) -> String {
    let visible = tags.visible.join(", ");
    match tags.overflow_label() {
        Some(label) => format!("{visible} ({label})"),
        None => visible,
    }
}

fn tags_cell(tags: &TagDisplay) -> Cell {
    if tags.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(tags_text(tags))
    }
}

pub fn facets_table(facets: &FacetValues) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for (column, values) in facets.iter() {
        let listed = if values.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(values.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
        };
        table.add_row(vec![
            Cell::new(column).add_attribute(Attribute::Bold),
            Cell::new(values.len()),
            listed,
        ]);
    }
    table
}

pub fn issues_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);

    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity()),
            issue.row().map_or_else(|| dim_cell("-"), Cell::new),
            issue.column().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(issue.message()),
        ]);
    }
    table
}

/// One-line outcome, e.g. `12 rows checked: 1 error, 3 warnings`.
pub fn validation_summary(report: &ValidationReport) -> String {
    format!(
        "{} checked: {}, {}",
        plural(report.rows_checked, "row"),
        plural(report.error_count(), "error"),
        plural(report.warning_count(), "warning"),
    )
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
