//! End-to-end tests for the chunk pipeline with the crime record rule set.

use polars::prelude::{AnyValue, Column, DataFrame};

use scrub_core::frame_utils::has_column;
use scrub_core::{RETAINED_COLUMNS, scrub_chunk};

/// A fully valid record, column name to value.
fn valid_row() -> Vec<(&'static str, &'static str)> {
    vec![
        ("id", "10001"),
        ("case_number", "HY123456"),
        ("date", "03/18/2015 07:44:58 PM"),
        ("block", "013XX W 3RD AVE"),
        ("iucr", "0486"),
        ("primary_type", "BATTERY"),
        ("description", "SIMPLE"),
        ("location_description", "STREET"),
        ("arrest", "true"),
        ("domestic", "false"),
        ("beat", "0924"),
        ("district", "009"),
        ("ward", "11"),
        ("community_area", "58"),
        ("location", "(41.88, -87.62)"),
        ("zip_codes", "60601"),
    ]
}

/// Build a chunk frame from rows expressed as overrides of the valid record.
fn chunk(rows: Vec<Vec<(&str, &str)>>) -> DataFrame {
    let mut cols = vec![Column::new(
        "file_index".into(),
        (0..rows.len() as i64).collect::<Vec<_>>(),
    )];
    for name in RETAINED_COLUMNS {
        let values: Vec<Option<String>> = rows
            .iter()
            .map(|row| {
                let value = row
                    .iter()
                    .find(|(column, _)| column == name)
                    .map(|(_, value)| *value)
                    .unwrap_or_else(|| {
                        valid_row()
                            .iter()
                            .find(|(column, _)| column == name)
                            .map(|(_, value)| *value)
                            .expect("known column")
                    });
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            })
            .collect();
        cols.push(Column::new((*name).into(), values));
    }
    DataFrame::new(cols).expect("chunk frame")
}

fn cell(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
    let series = df.column(column).expect("column");
    scrub_ingest::opt_str(series.get(idx).unwrap_or(AnyValue::Null))
}

#[test]
fn every_row_lands_in_clean_or_hard_rejects() {
    let df = chunk(vec![
        vec![],
        vec![("id", "abc")],
        vec![("case_number", "123456")],
        vec![("id", "")],
        vec![],
    ]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert_eq!(outcome.rows_in, 5);
    assert_eq!(outcome.rows_clean, 2);
    assert_eq!(outcome.hard_rejects.height(), 3);
    assert_eq!(outcome.rows_clean + outcome.hard_rejects.height(), 5);
}

#[test]
fn null_or_non_digit_id_is_always_excluded() {
    let df = chunk(vec![vec![("id", "")], vec![("id", "12B4")], vec![]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert_eq!(outcome.rows_clean, 1);
    assert_eq!(cell(&outcome.hard_rejects, "cols", 0).as_deref(), Some("id"));
    assert_eq!(cell(&outcome.hard_rejects, "cols", 1).as_deref(), Some("id"));
}

#[test]
fn case_number_needs_a_two_letter_prefix() {
    let df = chunk(vec![vec![("case_number", "123456")], vec![]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert_eq!(outcome.rows_clean, 1);
    assert_eq!(outcome.hard_rejects.height(), 1);
    assert_eq!(
        cell(&outcome.hard_rejects, "cols", 0).as_deref(),
        Some("case_number")
    );
    // Hard reject rows carry the original values.
    assert_eq!(
        cell(&outcome.hard_rejects, "case_number", 0).as_deref(),
        Some("123456")
    );
    assert_eq!(
        cell(&outcome.hard_rejects, "file_name", 0).as_deref(),
        Some("chunk_001.csv")
    );
}

#[test]
fn date_yields_year_and_month_columns() {
    let df = chunk(vec![vec![], vec![("date", "11/02/2014 01:30:00 AM")]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert_eq!(cell(&outcome.clean, "year", 0).as_deref(), Some("2015"));
    assert_eq!(cell(&outcome.clean, "month", 0).as_deref(), Some("3"));
    assert_eq!(cell(&outcome.clean, "year", 1).as_deref(), Some("2014"));
    assert_eq!(cell(&outcome.clean, "month", 1).as_deref(), Some("11"));
}

#[test]
fn unparseable_dates_are_hard_rejected() {
    let df = chunk(vec![
        vec![("date", "2015-03-18")],
        vec![("date", "0000-00-00")],
        vec![],
    ]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert_eq!(outcome.rows_clean, 1);
    assert_eq!(outcome.hard_rejects.height(), 2);
}

#[test]
fn zip_codes_are_normalized_to_five_digits() {
    let df = chunk(vec![
        vec![("zip_codes", "606")],
        vec![("zip_codes", "6060")],
        vec![("zip_codes", "60601")],
    ]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    // Length 3 is invalid: nulled, original preserved.
    assert_eq!(cell(&outcome.clean, "zip_codes", 0), None);
    assert_eq!(
        cell(&outcome.soft_rejects, "zip_codes_orig", 0).as_deref(),
        Some("606")
    );
    // Length 4 gains a leading zero, length 5 passes through.
    assert_eq!(cell(&outcome.clean, "zip_codes", 1).as_deref(), Some("06060"));
    assert_eq!(cell(&outcome.clean, "zip_codes", 2).as_deref(), Some("60601"));
}

#[test]
fn location_is_decomposed_and_dropped() {
    let df = chunk(vec![vec![]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert!(!has_column(&outcome.clean, "location"));
    assert_eq!(cell(&outcome.clean, "latitude", 0).as_deref(), Some("41.88"));
    assert_eq!(
        cell(&outcome.clean, "longitude", 0).as_deref(),
        Some("-87.62")
    );
}

#[test]
fn block_is_decomposed_into_house_and_street() {
    let df = chunk(vec![vec![]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert_eq!(
        cell(&outcome.clean, "house_num", 0).as_deref(),
        Some("013XX")
    );
    assert_eq!(
        cell(&outcome.clean, "street_addr", 0).as_deref(),
        Some("W 3RD AVE")
    );
}

#[test]
fn titles_are_normalized_in_clean_output() {
    let df = chunk(vec![vec![]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert_eq!(
        cell(&outcome.clean, "primary_type", 0).as_deref(),
        Some("Battery")
    );
    assert_eq!(
        cell(&outcome.clean, "description", 0).as_deref(),
        Some("Simple")
    );
    assert_eq!(
        cell(&outcome.clean, "location_description", 0).as_deref(),
        Some("Street")
    );
}

#[test]
fn multi_field_soft_reject_appears_once_with_all_columns() {
    let df = chunk(vec![vec![("district", "north"), ("ward", "x")], vec![]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert_eq!(outcome.rows_clean, 2);
    assert_eq!(outcome.soft_rejects.height(), 1);
    assert_eq!(
        cell(&outcome.soft_rejects, "cols", 0).as_deref(),
        Some("district;ward")
    );
    assert_eq!(
        cell(&outcome.soft_rejects, "district_orig", 0).as_deref(),
        Some("north")
    );
    assert_eq!(
        cell(&outcome.soft_rejects, "ward_orig", 0).as_deref(),
        Some("x")
    );
    assert_eq!(cell(&outcome.soft_rejects, "district", 0), None);
}

#[test]
fn clean_output_hides_bookkeeping_columns() {
    let df = chunk(vec![vec![("iucr", "bad-code")], vec![]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    assert!(!has_column(&outcome.clean, "file_index"));
    assert!(!has_column(&outcome.clean, "iucr_orig"));
    assert!(has_column(&outcome.soft_rejects, "iucr_orig"));
    assert!(has_column(&outcome.hard_rejects, "file_index"));
}

#[test]
fn shadow_column_mirrors_the_soft_reject_record() {
    let df = chunk(vec![vec![("beat", "nine")], vec![]]);
    let outcome = scrub_chunk(&df, "chunk_001.csv").expect("scrub");

    let rejected = outcome
        .soft_record
        .rows_for("beat")
        .expect("beat processed");
    assert_eq!(rejected.iter().copied().collect::<Vec<_>>(), vec![0]);
    // Shadow holds the original exactly where the clean value is null.
    assert_eq!(cell(&outcome.clean, "beat", 0), None);
    assert_eq!(cell(&outcome.clean, "beat", 1).as_deref(), Some("0924"));
    assert_eq!(
        cell(&outcome.soft_rejects, "beat_orig", 0).as_deref(),
        Some("nine")
    );
}

#[test]
fn rerunning_the_pipeline_yields_identical_results() {
    let df = chunk(vec![
        vec![],
        vec![("id", "oops")],
        vec![("ward", "x"), ("zip_codes", "606")],
    ]);
    let first = scrub_chunk(&df, "chunk_001.csv").expect("first run");
    let second = scrub_chunk(&df, "chunk_001.csv").expect("second run");

    assert_eq!(first.rows_clean, second.rows_clean);
    assert_eq!(first.hard_record.union(), second.hard_record.union());
    assert_eq!(first.soft_record.union(), second.soft_record.union());
    assert!(first.clean.equals_missing(&second.clean));
}
