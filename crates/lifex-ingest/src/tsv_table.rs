//! Tab-separated wide-table loading.
//!
//! The Eurostat export is a tab-separated file whose first column holds the
//! composite `unit,sex,age,geo` identifier and whose remaining columns are
//! one year each. Cells arrive as unparsed text, frequently annotated with
//! footnote flags (`"78.5 e"`); nothing is coerced here.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// A raw wide table: one header row plus unparsed text cells.
#[derive(Debug, Clone)]
pub struct TsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TsvTable {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a tab-separated wide table.
///
/// The first non-empty record is taken as the header row; data rows are
/// padded or truncated to the header width. All-empty records are skipped.
pub fn read_tsv_table(path: &Path) -> Result<TsvTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read tsv: {}", path.display()))?;

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if headers.is_empty() {
            headers = record.iter().map(normalize_header).collect();
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read tsv table"
    );
    Ok(TsvTable { headers, rows })
}
