//! CSV reading and writing.

mod header;
mod reader;
mod writer;

pub use header::parse_csv_line;
pub use reader::{read_csv_headers, read_csv_table, validate_encoding};
pub use writer::write_csv_table;
