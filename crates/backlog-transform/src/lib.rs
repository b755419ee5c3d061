//! Backlog report generation.
//!
//! [`BacklogExport`] turns a raw backlog table into a report-shaped table:
//! columns are renamed according to a [`ColumnMapping`], the mapping is
//! checked for completeness, and everything except the mapping's target
//! columns is dropped.
//!
//! Tables are accessed through the [`Table`] trait, implemented for the
//! Polars [`DataFrame`](polars::prelude::DataFrame).
//!
//! ```
//! use std::sync::Arc;
//!
//! use backlog_model::ColumnMapping;
//! use backlog_transform::BacklogExport;
//!
//! let table = polars::df!(
//!     "ID" => [5, 6, 7],
//!     "Game" => ["Ms. Pac-Man", "Resident Evil", "Bomberman 64"],
//!     "Notes" => ["", "", ""],
//! )
//! .unwrap();
//! let mapping = ColumnMapping::from_pairs([("ID", "IGDB ID"), ("Game", "Game Name")]);
//!
//! let mut export = BacklogExport::new(table, Arc::new(mapping));
//! export.generate().unwrap();
//!
//! assert_eq!(export.column_names(), ["IGDB ID", "Game Name"]);
//! ```

pub use backlog_model::ColumnMapping;

pub mod error;
pub mod export;
pub mod table;

pub use error::{ExportError, Result, TableError};
pub use export::{BacklogExport, missing_sources};
pub use table::Table;
