//! Region filtering.

use crate::melt::MeltedRow;

/// Case-insensitive exact match between a row's region and the selector.
///
/// The selector is an opaque key here; whether it names a known region is
/// the caller's concern. No partial matching.
pub fn matches_region(candidate: &str, wanted: &str) -> bool {
    candidate.eq_ignore_ascii_case(wanted)
}

/// Keep only rows whose decoded region matches the selector.
///
/// Rows without a decoded region never match. An unmatched selector
/// yields an empty result, not an error.
pub fn filter_rows(rows: Vec<MeltedRow>, region: &str) -> Vec<MeltedRow> {
    rows.into_iter()
        .filter(|row| {
            row.key
                .region()
                .is_some_and(|candidate| matches_region(candidate, region))
        })
        .collect()
}
