//! Per-variant dataset schema.
//!
//! Deployed catalogs name their columns differently ("Dataset Name" vs
//! "Name", "Link" vs "URL"). A [`DatasetSchema`] lists the header aliases
//! accepted for each logical field and classifies the filterable columns,
//! so one pipeline serves every variant.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// How the filter engine treats a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Comma-separated multi-value column.
    Tag,
    /// Single value compared by exact equality.
    Value,
    /// Boolean column using the schema's truthy/falsy spellings.
    Flag,
    /// Group of boolean columns named `"<group> - <identifier>"`.
    FlagGroup,
}

impl ColumnKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tag => "tag column",
            Self::Value => "value column",
            Self::Flag => "flag column",
            Self::FlagGroup => "flag group",
        }
    }
}

/// A set of boolean columns sharing a prefix, e.g. `Imaging type - xray`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagGroup {
    /// Group prefix (also the filter key).
    pub name: String,
    /// Known identifiers; each maps to the column `"<name> - <identifier>"`.
    #[serde(default)]
    pub identifiers: Vec<String>,
}

impl FlagGroup {
    pub fn new(name: impl Into<String>, identifiers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            identifiers,
        }
    }

    /// Column name holding the flag for one identifier.
    pub fn column(&self, identifier: &str) -> String {
        format!("{} - {}", self.name, identifier)
    }
}

/// Mapping from logical fields to the literal header aliases of one
/// catalog variant.
///
/// Serialized to TOML for custom deployments; see [`SchemaPreset`] for the
/// built-in variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSchema {
    /// Aliases for the display name, in priority order.
    pub name: Vec<String>,
    /// Aliases for the dataset link.
    pub link: Vec<String>,
    /// Aliases for the free-form notes.
    pub notes: Vec<String>,
    /// Comma-separated multi-value columns.
    pub tag_columns: Vec<String>,
    /// Single-value columns (licence, access type).
    pub value_columns: Vec<String>,
    /// Boolean availability columns.
    pub flag_columns: Vec<String>,
    /// Informational columns shown alongside a record (DOI, source, ...).
    pub detail_columns: Vec<String>,
    /// Spellings treated as true in flag columns.
    pub truthy_values: Vec<String>,
    /// Spellings treated as false in flag columns.
    pub falsy_values: Vec<String>,
    /// Columns every well-formed file of this variant carries.
    pub required_columns: Vec<String>,
    /// Groups of category spellings that are known to be distinct.
    pub category_whitelist: Vec<Vec<String>>,
    /// Boolean column groups. Kept last so TOML arrays of tables follow
    /// plain values.
    pub flag_groups: Vec<FlagGroup>,
}

impl Default for DatasetSchema {
    fn default() -> Self {
        Self::complete()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl DatasetSchema {
    /// Schema of the complete catalog (`ultrasound_dataset_complete.csv`).
    pub fn complete() -> Self {
        Self {
            name: strings(&["Dataset Name", "Name"]),
            link: strings(&["Link", "URL"]),
            notes: strings(&["Notes", "Data notes"]),
            tag_columns: strings(&["Modalities", "Clinical Application"]),
            value_columns: strings(&["Licence"]),
            flag_columns: strings(&[
                "Segmentaitions Available",
                "Landmarks Available",
                "Meshes (STL) Available",
                "Tracking / Pose Data",
                "Ground-Truth Transformations",
            ]),
            detail_columns: strings(&[
                "Subjects",
                "Registraition Type of Patients",
                "DOI",
                "Source",
            ]),
            truthy_values: strings(&["TRUE", "Y"]),
            falsy_values: strings(&["FALSE", "N"]),
            required_columns: strings(&[
                "Dataset Name",
                "Modalities",
                "Clinical Application",
                "Registraition Type of Patients",
                "Segmentaitions Available",
                "Landmarks Available",
                "Meshes (STL) Available",
                "Tracking / Pose Data",
                "Ground-Truth Transformations",
                "Subjects",
                "Link",
                "Source",
                "DOI",
                "Licence",
                "Notes",
            ]),
            category_whitelist: vec![
                strings(&[
                    "US",
                    "US (2D)",
                    "US (3D)",
                    "US (2D, 3D)",
                    "US (Video)",
                    "US (Sweep)",
                    "US (MicroUltrasound)",
                    "US (2D",
                ]),
                strings(&[
                    "Brain Cancer",
                    "Breast Cancer",
                    "Lung Cancer",
                    "Liver Cancer",
                    "Uterus Cancer",
                    "Pancreas Cancer",
                    "General",
                    "General MSK",
                    "Prostate",
                    "Prostate Cancer",
                ]),
            ],
            flag_groups: Vec::new(),
        }
    }

    /// Schema of the older snapshot catalog (`snapshot-dataset.csv`).
    pub fn snapshot() -> Self {
        Self {
            name: strings(&["Name", "Dataset Name"]),
            link: strings(&["URL", "Link"]),
            notes: strings(&["Data notes", "Notes"]),
            tag_columns: strings(&["Imaging type", "Area of body"]),
            value_columns: Vec::new(),
            flag_columns: strings(&["Open access"]),
            detail_columns: Vec::new(),
            truthy_values: strings(&["TRUE", "Y"]),
            falsy_values: strings(&["FALSE", "N"]),
            required_columns: strings(&["Name", "URL"]),
            category_whitelist: vec![
                strings(&["MicroUltrasound", "Ultrasound"]),
                strings(&["General", "General MSK"]),
            ],
            flag_groups: Vec::new(),
        }
    }

    /// Parse a schema from TOML. Missing keys fall back to the complete
    /// schema's values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let schema: Self = toml::from_str(content).map_err(|e| SchemaError::Parse {
            message: e.to_string(),
        })?;
        schema.validate_config()?;
        Ok(schema)
    }

    /// Load a schema from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SchemaError::Serialize {
            message: e.to_string(),
        })
    }

    /// Check that the schema can drive the pipeline unambiguously.
    pub fn validate_config(&self) -> Result<()> {
        if self.name.iter().all(|alias| alias.trim().is_empty()) {
            return Err(SchemaError::MissingNameAliases);
        }

        let mut seen: BTreeMap<&str, ColumnKind> = BTreeMap::new();
        let classified = self
            .tag_columns
            .iter()
            .map(|c| (c.as_str(), ColumnKind::Tag))
            .chain(self.value_columns.iter().map(|c| (c.as_str(), ColumnKind::Value)))
            .chain(self.flag_columns.iter().map(|c| (c.as_str(), ColumnKind::Flag)))
            .chain(
                self.flag_groups
                    .iter()
                    .map(|g| (g.name.as_str(), ColumnKind::FlagGroup)),
            );

        for (column, kind) in classified {
            if let Some(previous) = seen.insert(column, kind) {
                return Err(SchemaError::ConflictingColumn {
                    column: column.to_string(),
                    first: previous.label(),
                    second: kind.label(),
                });
            }
        }
        Ok(())
    }

    /// Classify a filter key. Keys the schema does not mention are treated
    /// as single-value columns.
    pub fn column_kind(&self, key: &str) -> ColumnKind {
        if self.tag_columns.iter().any(|c| c == key) {
            ColumnKind::Tag
        } else if self.flag_groups.iter().any(|g| g.name == key) {
            ColumnKind::FlagGroup
        } else if self.flag_columns.iter().any(|c| c == key) {
            ColumnKind::Flag
        } else {
            ColumnKind::Value
        }
    }

    /// Look up a flag group by name.
    pub fn flag_group(&self, name: &str) -> Option<&FlagGroup> {
        self.flag_groups.iter().find(|g| g.name == name)
    }

    /// Whether a raw cell value reads as true.
    pub fn is_truthy(&self, value: &str) -> bool {
        let value = value.trim();
        self.truthy_values.iter().any(|t| t == value)
    }

    /// Whether a raw cell value reads as false.
    pub fn is_falsy(&self, value: &str) -> bool {
        let value = value.trim();
        self.falsy_values.iter().any(|f| f == value)
    }
}

/// Built-in catalog variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPreset {
    #[default]
    Complete,
    Snapshot,
}

impl SchemaPreset {
    /// Build the schema for this preset.
    pub fn schema(&self) -> DatasetSchema {
        match self {
            Self::Complete => DatasetSchema::complete(),
            Self::Snapshot => DatasetSchema::snapshot(),
        }
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Snapshot => "snapshot",
        }
    }
}

impl FromStr for SchemaPreset {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "complete" => Ok(Self::Complete),
            "snapshot" => Ok(Self::Snapshot),
            _ => Err(SchemaError::UnknownPreset {
                name: s.to_string(),
            }),
        }
    }
}
