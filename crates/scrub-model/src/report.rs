use serde::{Deserialize, Serialize};

/// Rejected-row count for one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRejectCount {
    pub field: String,
    pub rows: usize,
}

/// Machine-readable summary of one scrubbed chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubSummaryPayload {
    pub schema: String,
    pub schema_version: u32,
    pub generated_at: String,
    pub chunk: String,
    pub rows_in: usize,
    pub rows_clean: usize,
    /// Distinct rows excluded entirely.
    pub hard_reject_rows: usize,
    /// Distinct rows with at least one nulled field.
    pub soft_reject_rows: usize,
    /// Total nulled fields (a row with two bad fields counts twice).
    pub soft_fields_nulled: usize,
    pub hard_rejects: Vec<FieldRejectCount>,
    pub soft_rejects: Vec<FieldRejectCount>,
}
