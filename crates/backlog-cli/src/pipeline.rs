//! Backlog export pipeline.
//!
//! 1. **Mapping**: load a mapping file or fall back to the Infinite Backlog mapping
//! 2. **Ingest**: read the backlog CSV export
//! 3. **Generate**: rename and project into the report schema
//! 4. **Output**: write the report CSV (skipped on dry runs)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use backlog_ingest::{read_csv_table, write_csv_table};
use backlog_model::{ColumnMapping, infinite_backlog_mapping};
use backlog_transform::{BacklogExport, ExportError, Table};

use crate::types::ExportResult;

/// Inputs for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub input: PathBuf,
    /// Defaults to [`default_output_path`] of the input.
    pub output: Option<PathBuf>,
    /// JSON mapping file; the Infinite Backlog mapping when `None`.
    pub mapping: Option<PathBuf>,
    pub dry_run: bool,
}

/// Loads a JSON mapping file, or the shipped mapping when no path is given.
pub fn load_mapping(path: Option<&Path>) -> Result<ColumnMapping> {
    let Some(path) = path else {
        return Ok(infinite_backlog_mapping());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read mapping file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse mapping file {}", path.display()))
}

/// `<dir>/<stem>-report.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backlog".to_string());
    input.with_file_name(format!("{stem}-report.csv"))
}

/// Runs the full export: read, generate, write.
pub fn export_backlog(options: &ExportOptions) -> Result<ExportResult> {
    let span = info_span!("export", input = %options.input.display());
    let _guard = span.enter();

    let mapping = Arc::new(load_mapping(options.mapping.as_deref())?);

    let table = read_csv_table(&options.input)
        .with_context(|| format!("read backlog {}", options.input.display()))?;
    let rows = table.height();
    let dropped: Vec<String> = Table::column_names(&table)
        .into_iter()
        .filter(|column| mapping.target_for(column).is_none())
        .collect();
    info!(rows, columns = table.width(), "loaded backlog");

    let mut export = BacklogExport::new(table, Arc::clone(&mapping));
    export
        .generate()
        .inspect_err(|error| {
            if let ExportError::MissingSourceColumn { missing } = error {
                warn!(?missing, "backlog is missing mapped columns");
            }
        })
        .with_context(|| format!("generate report from {}", options.input.display()))?;

    let output = if options.dry_run {
        info!("dry run, report not written");
        None
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&options.input));
        let mut report = export.into_table();
        write_csv_table(&mut report, &path)
            .with_context(|| format!("write report {}", path.display()))?;
        info!(output = %path.display(), "wrote report");
        Some(path)
    };

    Ok(ExportResult {
        input: options.input.clone(),
        output,
        rows,
        columns: mapping
            .pairs()
            .map(|(source, target)| (source.to_string(), target.to_string()))
            .collect(),
        dropped,
    })
}
