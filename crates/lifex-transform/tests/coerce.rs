//! Tests for year/value coercion.

use lifex_model::SeriesKey;
use lifex_transform::{MeltedRow, coerce_rows, extract_value, parse_year};
use proptest::prelude::{prop_assert_eq, proptest};

fn melted(key: &str, year: &str, value: &str) -> MeltedRow {
    MeltedRow {
        key: SeriesKey::parse(key),
        year: year.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn year_must_be_all_digits_after_trimming() {
    assert_eq!(parse_year("2020"), Some(2020));
    assert_eq!(parse_year(" 2020 "), Some(2020));
    assert_eq!(parse_year("2020 e"), None);
    assert_eq!(parse_year("-2020"), None);
    assert_eq!(parse_year(""), None);
}

#[test]
fn value_requires_exactly_one_decimal_match() {
    assert_eq!(extract_value("78.5 e"), Some(78.5));
    assert_eq!(extract_value("-1.5 b"), Some(-1.5));
    // Ambiguous multi-number cell: rejected rather than guessed at.
    assert_eq!(extract_value("78.5 80.2"), None);
    // No fractional part means no match at all.
    assert_eq!(extract_value("79"), None);
    assert_eq!(extract_value(":"), None);
    assert_eq!(extract_value(""), None);
}

#[test]
fn coerce_drops_malformed_rows_and_preserves_order() {
    let rows = vec![
        melted("YR,F,Y1,PT", "2019", "80.1"),
        melted("YR,F,Y1,PT", "2019 e", "80.1"),
        melted("YR,F,Y1,PT", "2020", "78.5 80.2"),
        melted("YR,F,Y1,PT", "2021", "81.0 p"),
    ];

    let observations = coerce_rows(rows);
    assert_eq!(observations.len(), 2);
    assert_eq!((observations[0].year, observations[0].value), (2019, 80.1));
    assert_eq!((observations[1].year, observations[1].value), (2021, 81.0));
}

#[test]
fn coerce_drops_rows_with_incomplete_keys() {
    let rows = vec![melted("YR,F", "2020", "78.5")];
    assert!(coerce_rows(rows).is_empty());
}

proptest! {
    #[test]
    fn any_single_embedded_decimal_is_extracted(
        whole in 0i32..200,
        frac in 0u32..100,
        flag in "[a-z]{0,2}",
    ) {
        let number = format!("{whole}.{frac:02}");
        let raw = format!("{number} {flag}");
        let expected: f64 = number.parse().expect("formatted decimal");
        prop_assert_eq!(extract_value(&raw), Some(expected));
    }

    #[test]
    fn two_embedded_decimals_are_always_rejected(a in 0i32..100, b in 0i32..100) {
        let raw = format!("{a}.5 {b}.2");
        prop_assert_eq!(extract_value(&raw), None);
    }
}
