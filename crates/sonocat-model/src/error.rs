//! Error types for schema configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or checking a [`DatasetSchema`](crate::DatasetSchema).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read the schema file.
    #[error("failed to read schema file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema file is not valid TOML for a dataset schema.
    #[error("failed to parse schema: {message}")]
    Parse { message: String },

    /// Failed to serialize a schema back to TOML.
    #[error("failed to serialize schema: {message}")]
    Serialize { message: String },

    /// No header alias configured for the display name.
    #[error("schema has no display name aliases")]
    MissingNameAliases,

    /// A column is classified as more than one filter kind.
    #[error("column '{column}' is configured as both {first} and {second}")]
    ConflictingColumn {
        column: String,
        first: &'static str,
        second: &'static str,
    },

    /// Unknown schema preset name.
    #[error("unknown schema preset '{name}' (expected 'complete' or 'snapshot')")]
    UnknownPreset { name: String },
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchemaError::ConflictingColumn {
            column: "Licence".to_string(),
            first: "tag column",
            second: "value column",
        };
        assert_eq!(
            err.to_string(),
            "column 'Licence' is configured as both tag column and value column"
        );
    }

    #[test]
    fn test_unknown_preset_display() {
        let err = SchemaError::UnknownPreset {
            name: "legacy".to_string(),
        };
        assert!(err.to_string().contains("'legacy'"));
    }
}
