//! Load and write plumbing around the cleaning core.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use lifex_ingest::{read_json_records, read_tsv_table};
use lifex_transform::{ObservationFrame, RawInput};

use crate::cli::InputFormatArg;

/// Load the raw export for the requested encoding.
///
/// No sniffing: the pipeline never guesses the other encoding when the
/// file does not match the one requested.
pub fn load_input(path: &Path, format: InputFormatArg) -> Result<RawInput> {
    match format {
        InputFormatArg::Tsv => Ok(RawInput::Wide(read_tsv_table(path)?)),
        InputFormatArg::Json => Ok(RawInput::Json(read_json_records(path)?)),
    }
}

/// Write the cleaned frame as a comma-separated file with header.
pub fn write_frame(mut frame: ObservationFrame, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create output: {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut frame.data)
        .with_context(|| format!("write csv: {}", path.display()))?;
    info!(
        path = %path.display(),
        records = frame.data.height(),
        "wrote cleaned dataset"
    );
    Ok(())
}
