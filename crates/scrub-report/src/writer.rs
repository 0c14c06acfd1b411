//! CSV artifact writers for one scrubbed chunk.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use scrub_core::ChunkOutcome;

/// Paths of the three artifacts written for a chunk.
#[derive(Debug, Clone)]
pub struct ChunkArtifacts {
    pub clean: PathBuf,
    pub hard_rejects: PathBuf,
    pub soft_rejects: PathBuf,
}

/// Chunk identifier without a trailing `.csv`, used to derive artifact names.
pub fn chunk_stem(chunk_id: &str) -> &str {
    chunk_id.strip_suffix(".csv").unwrap_or(chunk_id)
}

/// Write clean data and both reject reports under `output_dir`.
pub fn write_chunk_outputs(
    outcome: &mut ChunkOutcome,
    output_dir: &Path,
    chunk_id: &str,
) -> Result<ChunkArtifacts> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let stem = chunk_stem(chunk_id);
    let artifacts = ChunkArtifacts {
        clean: output_dir.join(format!("clean_{stem}.csv")),
        hard_rejects: output_dir.join(format!("hard_rejects_{stem}.csv")),
        soft_rejects: output_dir.join(format!("soft_rejects_{stem}.csv")),
    };
    write_frame(&mut outcome.clean, &artifacts.clean)?;
    write_frame(&mut outcome.hard_rejects, &artifacts.hard_rejects)?;
    write_frame(&mut outcome.soft_rejects, &artifacts.soft_rejects)?;
    info!(
        clean = %artifacts.clean.display(),
        hard_rejects = %artifacts.hard_rejects.display(),
        soft_rejects = %artifacts.soft_rejects.display(),
        "chunk outputs written"
    );
    Ok(artifacts)
}

fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
