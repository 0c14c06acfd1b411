//! Reject analysis and report frame assembly.

use std::collections::BTreeSet;

use anyhow::Result;
use polars::prelude::{BooleanChunked, Column, DataFrame, NewChunkedArray};
use tracing::info;

use scrub_model::{FILE_NAME_COLUMN, OFFENDING_COLS_COLUMN, RejectRecord, RowId};

use crate::frame_utils::row_ids;

/// Log per-field and total reject counts; returns the distinct rejected rows
/// for each phase.
pub fn analyze_rejects(
    hard: &RejectRecord,
    soft: &RejectRecord,
) -> (BTreeSet<RowId>, BTreeSet<RowId>) {
    for field in hard.fields() {
        info!(field, rows = hard.count_for(field), "hard rejects");
    }
    for field in soft.fields() {
        info!(field, rows = soft.count_for(field), "soft rejects");
    }
    let hard_rows = hard.union();
    let soft_rows = soft.union();
    info!(
        rows = hard_rows.len(),
        "hard reject total (entire row excluded)"
    );
    info!(
        rows = soft_rows.len(),
        "soft reject total (rows with nulled fields)"
    );
    info!(fields = soft.field_hits(), "soft fields nulled");
    (hard_rows, soft_rows)
}

/// Build a reject report frame: the rejected rows of `source`, annotated with
/// the chunk name and the semicolon-joined offending field list.
///
/// Every rejected row appears exactly once, even when several of its fields
/// failed.
pub fn build_reject_frame(
    source: &DataFrame,
    record: &RejectRecord,
    chunk_id: &str,
) -> Result<DataFrame> {
    let rejected = record.union();
    let ids = row_ids(source)?;
    let keep: Vec<bool> = ids.iter().map(|id| rejected.contains(id)).collect();
    let mask = BooleanChunked::from_slice("rejects".into(), &keep);
    let mut frame = source.filter(&mask)?;

    let frame_ids = row_ids(&frame)?;
    let offending: Vec<String> = frame_ids
        .iter()
        .map(|id| record.offending_fields(*id).join(";"))
        .collect();
    let height = frame.height();
    frame.insert_column(
        0,
        Column::new(FILE_NAME_COLUMN.into(), vec![chunk_id.to_string(); height]),
    )?;
    frame.insert_column(1, Column::new(OFFENDING_COLS_COLUMN.into(), offending))?;
    Ok(frame)
}
