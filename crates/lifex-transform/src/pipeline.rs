//! The cleaning pipeline.
//!
//! One entry point per encoding, composed from the pure stage functions:
//!
//! - wide: melt → region filter → coerce → project
//! - json: region filter → normalize → project
//!
//! Each stage threads an owned value forward and returns a fresh
//! collection; nothing is accumulated across invocations. Per-row
//! anomalies are dropped inside the stages (aggregate counts are logged
//! at debug level); structural anomalies abort the invocation.

use std::fmt;

use lifex_ingest::{CountryRecord, TsvTable};
use lifex_model::Result;
use tracing::debug;

use crate::coerce::coerce_rows;
use crate::filter::filter_rows;
use crate::frame::ObservationFrame;
use crate::json::normalize_records;
use crate::melt::melt_wide_table;

/// The two supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Wide,
    Json,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Wide => "wide",
            Encoding::Json => "json",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loaded input data, tagged by encoding.
///
/// Dispatching on this sum type is what keeps the pipeline from ever
/// guessing the other encoding: a wide table can only take the wide path.
#[derive(Debug, Clone)]
pub enum RawInput {
    Wide(TsvTable),
    Json(Vec<CountryRecord>),
}

impl RawInput {
    pub fn encoding(&self) -> Encoding {
        match self {
            RawInput::Wide(_) => Encoding::Wide,
            RawInput::Json(_) => Encoding::Json,
        }
    }

    /// Number of source rows or records before cleaning.
    pub fn record_count(&self) -> usize {
        match self {
            RawInput::Wide(table) => table.row_count(),
            RawInput::Json(records) => records.len(),
        }
    }
}

/// Clean loaded input down to the selected region's observations.
pub fn clean(input: RawInput, region: &str) -> Result<ObservationFrame> {
    match input {
        RawInput::Wide(table) => clean_wide(&table, region),
        RawInput::Json(records) => clean_json(records, region),
    }
}

/// Wide path: melt, filter to the region, coerce year/value, project.
pub fn clean_wide(table: &TsvTable, region: &str) -> Result<ObservationFrame> {
    let melted = melt_wide_table(table)?;
    let melted_count = melted.len();
    let matched = filter_rows(melted, region);
    let matched_count = matched.len();
    let observations = coerce_rows(matched);
    debug!(
        melted = melted_count,
        matched = matched_count,
        dropped = matched_count - observations.len(),
        emitted = observations.len(),
        "cleaned wide input"
    );
    ObservationFrame::from_observations(&observations)
}

/// JSON path: filter to the region, normalize records, project.
pub fn clean_json(records: Vec<CountryRecord>, region: &str) -> Result<ObservationFrame> {
    let total = records.len();
    let observations = normalize_records(records, region);
    debug!(
        records = total,
        emitted = observations.len(),
        "cleaned json input"
    );
    ObservationFrame::from_observations(&observations)
}
