//! Normalization of the record-oriented JSON export.

use lifex_ingest::CountryRecord;
use lifex_model::Observation;

use crate::filter::matches_region;

/// Filter records by region and normalize them into observations.
///
/// `country` becomes `region` (upper-cased to the canonical code form) and
/// `life_expectancy` becomes `value`; the `flag`/`flag_detail` annotations
/// are dropped. Year and value are taken as-is: the JSON export delivers
/// them already typed, so none of the TSV path's text coercion runs here.
pub fn normalize_records(records: Vec<CountryRecord>, region: &str) -> Vec<Observation> {
    records
        .into_iter()
        .filter(|record| matches_region(&record.country, region))
        .map(|record| Observation {
            unit: record.unit,
            sex: record.sex,
            age: record.age,
            region: record.country.to_ascii_uppercase(),
            year: record.year,
            value: record.life_expectancy,
        })
        .collect()
}
