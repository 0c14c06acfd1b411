//! One-chunk cleaning pipeline.
//!
//! The pipeline is a pure function of the input table and the rule sets:
//! re-running it on the same chunk produces identical clean data and reject
//! reports. There is no cross-chunk state, so independent invocations can
//! run in parallel.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::info;

use scrub_model::{FILE_INDEX_COLUMN, ORIG_SUFFIX, RejectRecord};

use crate::analyze::{analyze_rejects, build_reject_frame};
use crate::phases::{apply_hard_rejects, apply_soft_rejects, validate_rule_sets};
use crate::rules::{RETAINED_COLUMNS, mandatory_fields, optional_fields};

/// Everything produced by scrubbing one chunk.
#[derive(Debug, Clone)]
pub struct ChunkOutcome {
    /// Validated and transformed rows; shadow and row-identity columns
    /// excluded.
    pub clean: DataFrame,
    /// Rows excluded entirely, with original values.
    pub hard_rejects: DataFrame,
    /// Rows with nulled fields, with cleaned and original values.
    pub soft_rejects: DataFrame,
    pub hard_record: RejectRecord,
    pub soft_record: RejectRecord,
    pub rows_in: usize,
    pub rows_clean: usize,
}

/// Scrub one chunk with the crime record rule sets.
pub fn scrub_chunk(df: &DataFrame, chunk_id: &str) -> Result<ChunkOutcome> {
    let mandatory = mandatory_fields();
    let optional = optional_fields();
    validate_rule_sets(&[&mandatory, &optional])?;

    let mut selected: Vec<&str> = vec![FILE_INDEX_COLUMN];
    selected.extend(RETAINED_COLUMNS);
    let mut working = df
        .select(selected)
        .with_context(|| format!("chunk {chunk_id}: select retained columns"))?;
    let rows_in = working.height();
    let original = working.clone();

    let hard_record = apply_hard_rejects(&mut working, &mandatory)?;
    let soft_record = apply_soft_rejects(&mut working, &optional)?;
    analyze_rejects(&hard_record, &soft_record);

    let hard_rejects = build_reject_frame(&original, &hard_record, chunk_id)?;
    let soft_rejects = build_reject_frame(&working, &soft_record, chunk_id)?;

    let clean_columns: Vec<String> = working
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .filter(|name| name != FILE_INDEX_COLUMN && !name.ends_with(ORIG_SUFFIX))
        .collect();
    let clean = working.select(clean_columns)?;
    let rows_clean = clean.height();
    info!(chunk = chunk_id, rows_in, rows_clean, "chunk scrubbed");

    Ok(ChunkOutcome {
        clean,
        hard_rejects,
        soft_rejects,
        hard_record,
        soft_record,
        rows_in,
        rows_clean,
    })
}
