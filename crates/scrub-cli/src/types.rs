use std::path::PathBuf;

use scrub_report::ChunkArtifacts;

/// Result of scrubbing one chunk, kept for summary printing.
#[derive(Debug)]
pub struct ChunkResult {
    pub chunk: String,
    pub output_dir: PathBuf,
    pub rows_in: usize,
    pub rows_clean: usize,
    /// Distinct rows excluded entirely.
    pub hard_rows: usize,
    /// Distinct rows with at least one nulled field.
    pub soft_rows: usize,
    /// Total nulled fields across all rows.
    pub soft_field_hits: usize,
    pub hard_counts: Vec<(String, usize)>,
    pub soft_counts: Vec<(String, usize)>,
    /// Artifact paths; absent on a dry run.
    pub artifacts: Option<ChunkArtifacts>,
    /// Summary JSON path; absent on a dry run.
    pub summary_path: Option<PathBuf>,
}
