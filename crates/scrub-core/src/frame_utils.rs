//! Column read/write helpers over string-typed DataFrames.

use anyhow::{Result, anyhow};
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};

use scrub_ingest::{any_to_i64, opt_str};
use scrub_model::{FILE_INDEX_COLUMN, ScrubError};

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Read a column as owned optional strings; null and blank cells become
/// `None`.
pub fn opt_string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)
        .map_err(|_| ScrubError::MissingColumn(name.to_string()))?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(opt_str(series.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Write (or overwrite) a string column.
pub fn set_opt_string_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Keep only the rows flagged `true`.
pub fn filter_rows(df: &mut DataFrame, keep: &[bool]) -> Result<()> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    *df = df.filter(&mask)?;
    Ok(())
}

/// Row identifiers of the frame, in row order.
pub fn row_ids(df: &DataFrame) -> Result<Vec<i64>> {
    let series = df
        .column(FILE_INDEX_COLUMN)
        .map_err(|_| ScrubError::MissingColumn(FILE_INDEX_COLUMN.to_string()))?;
    let mut ids = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        let id = any_to_i64(value)
            .ok_or_else(|| anyhow!("`{FILE_INDEX_COLUMN}` must hold numeric row identifiers"))?;
        ids.push(id);
    }
    Ok(ids)
}
