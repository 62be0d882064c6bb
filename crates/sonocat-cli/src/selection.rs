//! Turning command-line filter arguments into [`FilterCriteria`].

use sonocat_model::FilterCriteria;

/// Parse a `KEY=VALUE` filter argument.
///
/// Only the first `=` splits, so values may contain `=`. The key is trimmed;
/// the value is kept as given because value columns compare exactly.
pub fn parse_filter(arg: &str) -> Result<(String, String), String> {
    let Some((key, value)) = arg.split_once('=') else {
        return Err(format!("expected KEY=VALUE, found '{arg}'"));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing column name in '{arg}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Build criteria from a query, repeated `KEY=VALUE` selections and flag
/// columns. Repeating a key selects several values for it.
pub fn build_criteria(
    query: Option<&str>,
    filters: &[(String, String)],
    flags: &[String],
) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();
    if let Some(query) = query {
        criteria = criteria.with_query(query);
    }
    for (key, value) in filters {
        criteria = criteria.with_value(key.as_str(), value.as_str());
    }
    for flag in flags {
        criteria = criteria.with_flag(flag.as_str());
    }
    criteria
}
