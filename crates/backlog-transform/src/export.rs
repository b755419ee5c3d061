//! The rename-then-project report engine.

use std::sync::Arc;

use polars::prelude::DataFrame;

use crate::ColumnMapping;
use crate::error::{ExportError, Result};
use crate::table::Table;

/// A backlog table paired with the mapping that shapes it into a report.
///
/// The mapping is shared; several exports may hold the same instance.
#[derive(Debug, Clone)]
pub struct BacklogExport<T: Table = DataFrame> {
    table: T,
    mapping: Arc<ColumnMapping>,
    generated: bool,
}

impl<T: Table> BacklogExport<T> {
    /// Wraps `table` without validating it against `mapping`.
    pub fn new(table: T, mapping: Arc<ColumnMapping>) -> Self {
        Self {
            table,
            mapping,
            generated: false,
        }
    }

    /// Column names of the current table, in order.
    pub fn column_names(&self) -> Vec<String> {
        self.table.column_names()
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// The current table; the report once [`generate`](Self::generate) succeeded.
    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn into_table(self) -> T {
        self.table
    }

    /// Renames columns per the mapping, then keeps only the target columns.
    ///
    /// On any error the stored table is left exactly as it was. A second call
    /// after success fails with [`ExportError::AlreadyGenerated`].
    pub fn generate(&mut self) -> Result<()> {
        if self.generated {
            return Err(ExportError::AlreadyGenerated);
        }

        let renamed = self.table.rename_columns(&self.mapping)?;

        let missing = missing_sources(&renamed, &self.mapping);
        if !missing.is_empty() {
            return Err(ExportError::MissingSourceColumn { missing });
        }

        self.table = renamed.select_columns(self.mapping.target_names())?;
        self.generated = true;
        Ok(())
    }
}

/// Source names whose target column is absent from a renamed table.
pub fn missing_sources<T: Table>(renamed: &T, mapping: &ColumnMapping) -> Vec<String> {
    mapping
        .pairs()
        .filter(|(_, target)| !renamed.has_column(target))
        .map(|(source, _)| source.to_string())
        .collect()
}
