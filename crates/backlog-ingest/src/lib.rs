//! Backlog CSV ingestion.
//!
//! Loads backlog-service CSV exports into Polars DataFrames and writes
//! generated reports back out as CSV.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use backlog_ingest::{read_csv_table, write_csv_table};
//!
//! let mut df = read_csv_table(Path::new("exports/infinite-backlog.csv"))?;
//! write_csv_table(&mut df, Path::new("reports/backlog.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use csv::{parse_csv_line, read_csv_headers, read_csv_table, validate_encoding, write_csv_table};
