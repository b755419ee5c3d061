use std::path::PathBuf;

/// Outcome of a single backlog export.
#[derive(Debug)]
pub struct ExportResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub rows: usize,
    /// `(source column, report column)` pairs in report order.
    pub columns: Vec<(String, String)>,
    /// Input columns with no place in the report.
    pub dropped: Vec<String>,
}
