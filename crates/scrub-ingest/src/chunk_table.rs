//! CSV chunk loading.
//!
//! A chunk is read with every cell kept as text: downstream validation is
//! regex-based and depends on values never being coerced to other types.
//! Headers are normalized to lower-case snake_case, cell whitespace is
//! squeezed, and a row-identity column is appended.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame};
use tracing::debug;

use scrub_model::{FILE_INDEX_COLUMN, ScrubError};

/// Lower-case a raw header and replace runs of whitespace with a single
/// underscore.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(&first.to_lowercase());
        for part in parts {
            normalized.push('_');
            normalized.push_str(&part.to_lowercase());
        }
    }
    normalized
}

/// Trim a cell and collapse runs of inner whitespace to one space. Blank
/// cells become null.
pub fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return None;
    }
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::with_capacity(trimmed.len());
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    Some(normalized)
}

/// Read one chunk file into a string-typed DataFrame with a `file_index`
/// row-identity column.
pub fn read_chunk(path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let value = record.get(idx).unwrap_or("");
            column.push(normalize_cell(value));
        }
    }
    debug!(
        file = %path.display(),
        columns = headers.len(),
        rows = columns.first().map(Vec::len).unwrap_or(0),
        "chunk read"
    );
    frame_from_columns(headers, columns)
}

/// Assemble normalized headers and cell columns into a DataFrame, prepending
/// the row-identity column.
pub fn frame_from_columns(
    headers: Vec<String>,
    columns: Vec<Vec<Option<String>>>,
) -> Result<DataFrame> {
    let mut seen = BTreeSet::new();
    for header in &headers {
        if header == FILE_INDEX_COLUMN {
            return Err(ScrubError::Config {
                field: header.clone(),
                reason: format!("`{FILE_INDEX_COLUMN}` is reserved for row identity"),
            }
            .into());
        }
        if !seen.insert(header.as_str()) {
            return Err(ScrubError::Config {
                field: header.clone(),
                reason: "duplicate column name after normalization".to_string(),
            }
            .into());
        }
    }
    let height = columns.first().map(Vec::len).unwrap_or(0);
    let row_ids: Vec<i64> = (0..height as i64).collect();
    let mut cols = Vec::with_capacity(headers.len() + 1);
    cols.push(Column::new(FILE_INDEX_COLUMN.into(), row_ids));
    for (header, values) in headers.iter().zip(columns) {
        cols.push(Column::new(header.as_str().into(), values));
    }
    let df = DataFrame::new(cols).context("assemble chunk columns")?;
    Ok(df)
}
