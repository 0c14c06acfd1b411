//! Machine-readable run summary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use scrub_core::ChunkOutcome;
use scrub_model::{FieldRejectCount, RejectRecord, ScrubSummaryPayload};

use crate::writer::chunk_stem;

const SUMMARY_SCHEMA: &str = "crime-scrubber.chunk-summary";
const SUMMARY_SCHEMA_VERSION: u32 = 1;

/// Build the summary payload for one scrubbed chunk.
pub fn summary_payload(outcome: &ChunkOutcome, chunk_id: &str) -> ScrubSummaryPayload {
    ScrubSummaryPayload {
        schema: SUMMARY_SCHEMA.to_string(),
        schema_version: SUMMARY_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        chunk: chunk_id.to_string(),
        rows_in: outcome.rows_in,
        rows_clean: outcome.rows_clean,
        hard_reject_rows: outcome.hard_record.union().len(),
        soft_reject_rows: outcome.soft_record.union().len(),
        soft_fields_nulled: outcome.soft_record.field_hits(),
        hard_rejects: field_counts(&outcome.hard_record),
        soft_rejects: field_counts(&outcome.soft_record),
    }
}

fn field_counts(record: &RejectRecord) -> Vec<FieldRejectCount> {
    record
        .fields()
        .map(|field| FieldRejectCount {
            field: field.to_string(),
            rows: record.count_for(field),
        })
        .collect()
}

/// Write the JSON summary next to the chunk artifacts; returns its path.
pub fn write_summary_json(
    output_dir: &Path,
    chunk_id: &str,
    outcome: &ChunkOutcome,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let path = output_dir.join(format!("summary_{}.json", chunk_stem(chunk_id)));
    let payload = summary_payload(outcome, chunk_id);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&path, format!("{json}\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
