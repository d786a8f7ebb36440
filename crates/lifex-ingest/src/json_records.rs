//! Record-oriented JSON source loading.
//!
//! The JSON variant of the dataset is already long-format: one record per
//! observation, with the region under `country` and the value under
//! `life_expectancy`, plus data-quality flags. Values arrive typed, so no
//! text coercion happens downstream on this path.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One raw record from the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub country: String,
    pub year: i32,
    pub life_expectancy: f64,
    /// Data-quality flag, dropped during normalization.
    pub flag: Option<String>,
    /// Human-readable flag description, dropped during normalization.
    pub flag_detail: Option<String>,
}

/// Read a JSON array of observation records.
///
/// A record list that does not match the expected field shape fails the
/// load; the cleaning core never sees structurally invalid JSON input.
pub fn read_json_records(path: &Path) -> Result<Vec<CountryRecord>> {
    let file = File::open(path).with_context(|| format!("open json: {}", path.display()))?;
    let records: Vec<CountryRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse json records: {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "read json records");
    Ok(records)
}
