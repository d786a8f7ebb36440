//! Tests for wide-to-long melting.

use lifex_ingest::TsvTable;
use lifex_model::CleanError;
use lifex_transform::melt_wide_table;

fn table(headers: &[&str], rows: &[&[&str]]) -> TsvTable {
    TsvTable {
        headers: headers.iter().map(|header| (*header).to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    }
}

#[test]
fn melts_in_year_column_order_then_row_order() {
    let wide = table(
        &["unit,sex,age,geo\\time", "2020", "2021"],
        &[
            &["YR,F,Y1,PT", "81.5", "81.9"],
            &["YR,M,Y1,PT", "75.2", "75.8"],
        ],
    );

    let melted = melt_wide_table(&wide).expect("melt");
    let order: Vec<(&str, &str, &str)> = melted
        .iter()
        .map(|row| {
            (
                row.key.sex.as_deref().expect("decoded sex"),
                row.year.as_str(),
                row.value.as_str(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("F", "2020", "81.5"),
            ("M", "2020", "75.2"),
            ("F", "2021", "81.9"),
            ("M", "2021", "75.8"),
        ]
    );
}

#[test]
fn decodes_composite_keys_positionally() {
    let wide = table(
        &["unit,sex,age,geo\\time", "2020"],
        &[&["YR,F,Y1,PT", "81.5"], &["YR,F", "80.0"]],
    );

    let melted = melt_wide_table(&wide).expect("melt");
    assert_eq!(melted[0].key.unit.as_deref(), Some("YR"));
    assert_eq!(melted[0].key.region.as_deref(), Some("PT"));
    // Short key: trailing fields stay unset, no error raised here.
    assert_eq!(melted[1].key.sex.as_deref(), Some("F"));
    assert_eq!(melted[1].key.age, None);
    assert_eq!(melted[1].key.region, None);
}

#[test]
fn identifier_only_table_is_a_structural_mismatch() {
    let narrow = table(&["unit,sex,age,geo\\time"], &[&["YR,F,Y1,PT"]]);
    let error = melt_wide_table(&narrow).unwrap_err();
    assert!(matches!(error, CleanError::StructuralMismatch(_)));
}

#[test]
fn empty_table_is_a_structural_mismatch() {
    let empty = table(&[], &[]);
    assert!(matches!(
        melt_wide_table(&empty),
        Err(CleanError::StructuralMismatch(_))
    ));
}
