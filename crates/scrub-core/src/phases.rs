//! Hard- and soft-reject phases.
//!
//! Both phases evaluate every field against the values that were in the table
//! when the phase started: no field's validation reads another field's
//! derived output, and rule sets whose planned columns overlap are rejected
//! up front. Field evaluation order therefore never changes the result.

use std::collections::BTreeSet;

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::{debug, info};

use scrub_model::{FILE_INDEX_COLUMN, FieldRule, RejectRecord, ScrubError};

use crate::field_processor::{FieldMode, process_field};
use crate::frame_utils::{filter_rows, row_ids};

/// Verify that the planned output columns (post-process targets and generator
/// outputs) across the given rule sets collide neither with each other, nor
/// with any source field, nor with the row-identity column.
pub fn validate_rule_sets(sets: &[&[(String, FieldRule)]]) -> Result<()> {
    let mut sources: BTreeSet<&str> = BTreeSet::new();
    for set in sets {
        for (field, _) in *set {
            sources.insert(field.as_str());
        }
    }
    let mut planned: BTreeSet<&str> = BTreeSet::new();
    for set in sets {
        for (_, rule) in *set {
            for name in rule.planned_columns() {
                if name == FILE_INDEX_COLUMN || sources.contains(name) || !planned.insert(name) {
                    return Err(ScrubError::ColumnCollision {
                        column: name.to_string(),
                    }
                    .into());
                }
            }
        }
    }
    Ok(())
}

/// Run the mandatory fields, then remove every row that failed any of them.
///
/// Removal happens once, over the union of all mandatory reject sets, so the
/// reported identifiers for every field refer to the unfiltered table.
pub fn apply_hard_rejects(
    df: &mut DataFrame,
    fields: &[(String, FieldRule)],
) -> Result<RejectRecord> {
    validate_rule_sets(&[fields])?;
    info!(rows = df.height(), "rows before hard rejects");
    let mut record = RejectRecord::new();
    for (field, rule) in fields {
        debug!(field = field.as_str(), "processing mandatory field");
        let outcome = process_field(df, field, rule, FieldMode::Mandatory)?;
        record.record(field, outcome.rejected);
    }
    let rejected = record.union();
    if !rejected.is_empty() {
        let ids = row_ids(df)?;
        let keep: Vec<bool> = ids.iter().map(|id| !rejected.contains(id)).collect();
        filter_rows(df, &keep)?;
    }
    info!(rows = df.height(), "rows after hard rejects");
    Ok(record)
}

/// Run the nullable fields against the hard-filtered table, nulling failing
/// values in place. Rows are never removed.
pub fn apply_soft_rejects(
    df: &mut DataFrame,
    fields: &[(String, FieldRule)],
) -> Result<RejectRecord> {
    validate_rule_sets(&[fields])?;
    let mut record = RejectRecord::new();
    for (field, rule) in fields {
        debug!(field = field.as_str(), "processing nullable field");
        let outcome = process_field(df, field, rule, FieldMode::Optional)?;
        record.record(field, outcome.rejected);
    }
    Ok(record)
}
