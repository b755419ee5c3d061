//! Column rename contracts.

use serde::{Deserialize, Serialize};

use crate::error::{MappingError, Result};

/// A position-paired rename from source column names to target column names.
///
/// `source_names()[i]` is renamed to `target_names()[i]`. Both sequences are
/// fixed at construction; there is no way to reassign them afterwards:
///
/// ```compile_fail
/// use backlog_model::ColumnMapping;
///
/// let mut mapping =
///     ColumnMapping::new(vec!["Source".into()], vec!["Target".into()]).unwrap();
/// mapping.source_names = vec!["Uh Oh".into()];
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColumnMapping")]
pub struct ColumnMapping {
    source_names: Vec<String>,
    target_names: Vec<String>,
}

#[derive(Deserialize)]
struct RawColumnMapping {
    source_names: Vec<String>,
    target_names: Vec<String>,
}

impl TryFrom<RawColumnMapping> for ColumnMapping {
    type Error = MappingError;

    fn try_from(raw: RawColumnMapping) -> Result<Self> {
        Self::new(raw.source_names, raw.target_names)
    }
}

impl ColumnMapping {
    /// Creates a mapping, rejecting sequences of unequal length.
    pub fn new(source_names: Vec<String>, target_names: Vec<String>) -> Result<Self> {
        if source_names.len() != target_names.len() {
            return Err(MappingError::LengthMismatch {
                sources: source_names.len(),
                targets: target_names.len(),
            });
        }
        Ok(Self {
            source_names,
            target_names,
        })
    }

    /// Builds a mapping from `(source, target)` pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let (source_names, target_names): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(source, target)| (source.into(), target.into()))
            .unzip();
        Self {
            source_names,
            target_names,
        }
    }

    pub fn source_names(&self) -> &[String] {
        &self.source_names
    }

    pub fn target_names(&self) -> &[String] {
        &self.target_names
    }

    pub fn len(&self) -> usize {
        self.source_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_names.is_empty()
    }

    /// Iterates `(source, target)` pairs in mapping order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.source_names
            .iter()
            .map(String::as_str)
            .zip(self.target_names.iter().map(String::as_str))
    }

    /// Returns the target name a source column is renamed to, if mapped.
    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.pairs()
            .find(|(candidate, _)| *candidate == source)
            .map(|(_, target)| target)
    }
}

/// Column names in an Infinite Backlog CSV export.
pub const INFINITE_BACKLOG_COLUMNS: [&str; 11] = [
    "IGDB ID",
    "Game name",
    "Game release date",
    "Platform",
    "Status",
    "Completion",
    "Playtime",
    "Rating (Score)",
    "Tags",
    "Date added",
    "Last updated",
];

/// Column names of the generated backlog report.
pub const REPORT_COLUMNS: [&str; 11] = [
    "IGDB ID",
    "Game Name",
    "Release Date",
    "Platform",
    "Status",
    "Completion",
    "Playtime",
    "Rating",
    "Tags",
    "Date Added",
    "Last Updated",
];

/// The mapping from an Infinite Backlog export to the report schema.
pub fn infinite_backlog_mapping() -> ColumnMapping {
    ColumnMapping::from_pairs(INFINITE_BACKLOG_COLUMNS.into_iter().zip(REPORT_COLUMNS))
}
