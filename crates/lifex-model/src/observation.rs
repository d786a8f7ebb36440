//! Cleaned observation records and the composite series key.

use serde::{Deserialize, Serialize};

/// Output column order for cleaned observations.
pub const OBSERVATION_COLUMNS: [&str; 6] = ["unit", "sex", "age", "region", "year", "value"];

/// One cleaned life-expectancy observation.
///
/// Every field is fully parsed: `year` survived digit validation and
/// `value` was extracted from exactly one decimal match in the raw cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i32,
    pub value: f64,
}

/// The decoded composite identifier of a wide-table row.
///
/// The source encodes four attributes in a single comma-separated field
/// (`unit,sex,age,region`). Decoding is positional with a fixed arity of
/// four: missing trailing tokens leave fields unset, and a key with more
/// than four tokens is undecodable, leaving every field unset. Anomalous
/// keys are not an error here; downstream filtering discards them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesKey {
    pub unit: Option<String>,
    pub sex: Option<String>,
    pub age: Option<String>,
    pub region: Option<String>,
}

impl SeriesKey {
    /// Decode a raw composite identifier.
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split(',').collect();
        if parts.len() > 4 {
            return SeriesKey::default();
        }
        SeriesKey {
            unit: parts.first().map(|part| (*part).to_string()),
            sex: parts.get(1).map(|part| (*part).to_string()),
            age: parts.get(2).map(|part| (*part).to_string()),
            region: parts.get(3).map(|part| (*part).to_string()),
        }
    }

    /// Returns the four decoded fields when the key was complete.
    pub fn into_fields(self) -> Option<(String, String, String, String)> {
        Some((self.unit?, self.sex?, self.age?, self.region?))
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
