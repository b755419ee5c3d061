//! Tabular data capability used by report generation.

use std::collections::HashSet;

use polars::prelude::DataFrame;

use crate::ColumnMapping;
use crate::error::TableError;

/// An ordered collection of uniquely named, equal-length columns.
///
/// Operations return new tables and leave `self` untouched.
pub trait Table: Sized {
    /// Column names in table order.
    fn column_names(&self) -> Vec<String>;

    fn has_column(&self, name: &str) -> bool {
        self.column_names().iter().any(|column| column == name)
    }

    /// Renames every column that appears as a mapping source to its target.
    ///
    /// Renames are applied simultaneously, so chained or swapped pairs do not
    /// cascade. Unmapped columns keep their name and position.
    fn rename_columns(&self, mapping: &ColumnMapping) -> Result<Self, TableError>;

    /// Keeps only `names`, in that order.
    fn select_columns(&self, names: &[String]) -> Result<Self, TableError>;
}

/// Computes the post-rename name of every column in `names`.
///
/// Fails on the first name that would occur twice.
pub(crate) fn renamed_column_names(
    names: &[String],
    mapping: &ColumnMapping,
) -> Result<Vec<String>, TableError> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut renamed = Vec::with_capacity(names.len());
    for name in names {
        let new_name = mapping.target_for(name).unwrap_or(name.as_str()).to_string();
        if !seen.insert(new_name.clone()) {
            return Err(TableError::DuplicateColumn { column: new_name });
        }
        renamed.push(new_name);
    }
    Ok(renamed)
}

impl Table for DataFrame {
    fn column_names(&self) -> Vec<String> {
        self.get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    fn has_column(&self, name: &str) -> bool {
        self.get_column_index(name).is_some()
    }

    fn rename_columns(&self, mapping: &ColumnMapping) -> Result<Self, TableError> {
        let renamed = renamed_column_names(&Table::column_names(self), mapping)?;
        let mut df = self.clone();
        df.set_column_names(renamed)?;
        Ok(df)
    }

    fn select_columns(&self, names: &[String]) -> Result<Self, TableError> {
        if let Some(column) = names.iter().find(|name| !Table::has_column(self, name)) {
            return Err(TableError::ColumnNotFound {
                column: column.clone(),
            });
        }
        Ok(self.select(names.iter().map(String::as_str))?)
    }
}
