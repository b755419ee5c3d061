//! Error types for report generation.

use thiserror::Error;

/// Errors raised by [`Table`](crate::Table) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A requested column does not exist.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// An operation would leave two columns with the same name.
    #[error("duplicate column name '{column}'")]
    DuplicateColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TableError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Errors raised by [`BacklogExport::generate`](crate::BacklogExport::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// At least one mapped source column is absent from the input table.
    ///
    /// `missing` lists the absent source names in mapping order.
    #[error("One or more source columns is missing.")]
    MissingSourceColumn { missing: Vec<String> },

    /// The export was already generated.
    #[error("backlog export has already been generated")]
    AlreadyGenerated,

    #[error(transparent)]
    Table(#[from] TableError),
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_message_is_fixed() {
        let err = ExportError::MissingSourceColumn {
            missing: vec!["Completion".to_string()],
        };
        assert_eq!(err.to_string(), "One or more source columns is missing.");
    }

    #[test]
    fn test_table_error_is_transparent() {
        let err = ExportError::from(TableError::ColumnNotFound {
            column: "Game".to_string(),
        });
        assert_eq!(err.to_string(), "column 'Game' not found");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let table_err: TableError = polars_err.into();
        assert!(matches!(table_err, TableError::DataFrame { .. }));
    }
}
