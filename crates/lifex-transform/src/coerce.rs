//! Year and value coercion for melted rows.
//!
//! The raw export annotates values with footnote flags (`"78.5 e"`) and
//! occasionally carries malformed year headers. Coercion keeps a row only
//! when the year text is purely decimal digits and the value text contains
//! exactly one embedded decimal number; everything else is dropped. The
//! exactly-one rule deliberately rejects ambiguous multi-number cells
//! (`"78.5 80.2"`) instead of guessing which figure applies.

use std::sync::LazyLock;

use lifex_model::Observation;
use regex::Regex;

use crate::melt::MeltedRow;

/// Signed decimal number with a mandatory fractional part.
static DECIMAL_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+\.\d+").expect("decimal value pattern"));

/// Parse a year that is, after trimming, entirely decimal digits.
pub fn parse_year(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Extract the value when the text embeds exactly one decimal number.
pub fn extract_value(text: &str) -> Option<f64> {
    let mut matches = DECIMAL_VALUE_REGEX.find_iter(text);
    let only = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    only.as_str().parse().ok()
}

/// Coerce melted rows into typed observations, dropping malformed rows.
///
/// A row survives only with a valid year, an unambiguous value, and a
/// fully decoded composite key. Order is preserved for surviving rows.
pub fn coerce_rows(rows: Vec<MeltedRow>) -> Vec<Observation> {
    rows.into_iter().filter_map(coerce_row).collect()
}

fn coerce_row(row: MeltedRow) -> Option<Observation> {
    let year = parse_year(&row.year)?;
    let value = extract_value(&row.value)?;
    let (unit, sex, age, region) = row.key.into_fields()?;
    Some(Observation {
        unit,
        sex,
        age,
        region,
        year,
        value,
    })
}
