//! Wide-to-long reshaping of the raw TSV export.

use lifex_ingest::TsvTable;
use lifex_model::{CleanError, Result, SeriesKey};
use tracing::debug;

/// One melted observation, pre-validation.
///
/// `year` and `value` stay text until coercion; the composite identifier
/// is already decoded into a [`SeriesKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeltedRow {
    pub key: SeriesKey,
    pub year: String,
    pub value: String,
}

/// Melt a wide table into long rows.
///
/// Each (identifier, year-column, cell) triple becomes one row. Output
/// order is year-column order first, then source row order. The table
/// must have the identifier column plus at least one year column;
/// anything narrower is a structural mismatch.
pub fn melt_wide_table(table: &TsvTable) -> Result<Vec<MeltedRow>> {
    if table.headers.len() < 2 {
        return Err(CleanError::StructuralMismatch(format!(
            "wide table needs an identifier column and at least one year column, got {}",
            table.headers.len()
        )));
    }

    let mut melted = Vec::with_capacity(table.rows.len() * (table.headers.len() - 1));
    for (col_idx, year) in table.headers.iter().enumerate().skip(1) {
        for row in &table.rows {
            let raw_key = row.first().map(String::as_str).unwrap_or("");
            let value = row.get(col_idx).cloned().unwrap_or_default();
            melted.push(MeltedRow {
                key: SeriesKey::parse(raw_key),
                year: year.clone(),
                value,
            });
        }
    }

    debug!(
        source_rows = table.rows.len(),
        year_columns = table.headers.len() - 1,
        melted = melted.len(),
        "melted wide table"
    );
    Ok(melted)
}
