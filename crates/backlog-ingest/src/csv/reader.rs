//! CSV file reading into Polars DataFrames.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

use super::header::parse_csv_line;

/// Number of rows Polars scans to infer column types.
const INFER_SCHEMA_ROWS: usize = 100;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Rejects files that start with a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted and stripped by the readers.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Reads the header row of a CSV file.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(open(path)?);

    let Some(first) = reader.lines().next() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let line = first.map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let line = line.strip_prefix('\u{feff}').unwrap_or(&line);

    let columns = parse_csv_line(line);
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Reads a CSV export with a single header row into a DataFrame.
///
/// Column names match [`read_csv_headers`] for the same file.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;
    let headers = read_csv_headers(path)?;

    let parse_error = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    if headers.len() != df.width() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header has {} fields but {} columns were parsed",
                headers.len(),
                df.width()
            ),
        });
    }
    df.set_column_names(headers.iter().map(String::as_str))
        .map_err(parse_error)?;

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = df.height(),
        "loaded CSV"
    );

    Ok(df)
}
