//! Tests for CSV chunk loading and normalization.

use polars::prelude::AnyValue;

use scrub_ingest::{is_missing_value, normalize_cell, normalize_header, opt_str, read_chunk};
use scrub_model::ScrubError;

#[test]
fn headers_become_lowercase_snake_case() {
    assert_eq!(normalize_header("Case Number"), "case_number");
    assert_eq!(normalize_header("  Location   Description "), "location_description");
    assert_eq!(normalize_header("\u{feff}ID"), "id");
    assert_eq!(normalize_header("ward"), "ward");
}

#[test]
fn cells_are_trimmed_and_squeezed() {
    assert_eq!(
        normalize_cell("  THEFT   OVER  $500 ").as_deref(),
        Some("THEFT OVER $500")
    );
    assert_eq!(normalize_cell("plain").as_deref(), Some("plain"));
    assert_eq!(normalize_cell("   "), None);
    assert_eq!(normalize_cell(""), None);
}

#[test]
fn read_chunk_normalizes_and_indexes_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chunk.csv");
    std::fs::write(
        &path,
        "ID,Case Number,Primary Type\n\
         10001,HY123456,  MOTOR   VEHICLE THEFT \n\
         10002,,BATTERY\n",
    )
    .expect("write csv");

    let df = read_chunk(&path).expect("read chunk");

    assert_eq!(df.height(), 2);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["file_index", "id", "case_number", "primary_type"]);

    let indexes = df.column("file_index").expect("file_index");
    assert_eq!(indexes.get(0).ok(), Some(AnyValue::Int64(0)));
    assert_eq!(indexes.get(1).ok(), Some(AnyValue::Int64(1)));

    let primary = df.column("primary_type").expect("primary_type");
    assert_eq!(
        opt_str(primary.get(0).expect("cell")).as_deref(),
        Some("MOTOR VEHICLE THEFT")
    );
    let case = df.column("case_number").expect("case_number");
    assert_eq!(opt_str(case.get(1).expect("cell")), None);
    assert!(is_missing_value(&case.get(1).expect("cell")));
    assert!(!is_missing_value(&case.get(0).expect("cell")));
}

#[test]
fn short_records_pad_with_nulls() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chunk.csv");
    std::fs::write(&path, "a,b,c\n1,2,3\n4,5\n").expect("write csv");

    let df = read_chunk(&path).expect("read chunk");

    assert_eq!(df.height(), 2);
    let c = df.column("c").expect("column c");
    assert_eq!(opt_str(c.get(1).expect("cell")), None);
}

#[test]
fn reserved_row_identity_header_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chunk.csv");
    std::fs::write(&path, "id,File Index\n1,2\n").expect("write csv");

    let error = read_chunk(&path).expect_err("reserved header must fail");
    assert!(matches!(
        error.downcast_ref::<ScrubError>(),
        Some(ScrubError::Config { .. })
    ));
}

#[test]
fn duplicate_headers_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chunk.csv");
    std::fs::write(&path, "Case Number,case  number\n1,2\n").expect("write csv");

    let error = read_chunk(&path).expect_err("duplicate header must fail");
    assert!(matches!(
        error.downcast_ref::<ScrubError>(),
        Some(ScrubError::Config { .. })
    ));
}
