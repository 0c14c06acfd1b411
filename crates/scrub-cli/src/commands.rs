//! Command implementations.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use scrub_core::{mandatory_fields, optional_fields, scrub_chunk};
use scrub_ingest::{SplitOptions, read_chunk, split_file};
use scrub_model::{Check, FieldRule, RejectRecord};
use scrub_report::{write_chunk_outputs, write_summary_json};

use crate::cli::{ChunkArgs, SplitArgs};
use crate::summary::print_fields;
use crate::types::ChunkResult;

pub fn run_chunk(args: &ChunkArgs) -> Result<ChunkResult> {
    let chunk_id = args.chunk_id.clone().unwrap_or_else(|| {
        args.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chunk".to_string())
    });
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("output")
    });
    info!(chunk = chunk_id.as_str(), input = %args.input.display(), "processing chunk");

    let df = read_chunk(&args.input)?;
    let mut outcome = scrub_chunk(&df, &chunk_id)?;

    let (artifacts, summary_path) = if args.dry_run {
        info!("dry run, skipping output files");
        (None, None)
    } else {
        let artifacts = write_chunk_outputs(&mut outcome, &output_dir, &chunk_id)?;
        let summary = write_summary_json(&output_dir, &chunk_id, &outcome)?;
        (Some(artifacts), Some(summary))
    };

    Ok(ChunkResult {
        chunk: chunk_id,
        output_dir,
        rows_in: outcome.rows_in,
        rows_clean: outcome.rows_clean,
        hard_rows: outcome.hard_record.union().len(),
        soft_rows: outcome.soft_record.union().len(),
        soft_field_hits: outcome.soft_record.field_hits(),
        hard_counts: field_counts(&outcome.hard_record),
        soft_counts: field_counts(&outcome.soft_record),
        artifacts,
        summary_path,
    })
}

fn field_counts(record: &RejectRecord) -> Vec<(String, usize)> {
    record
        .fields()
        .map(|field| (field.to_string(), record.count_for(field)))
        .collect()
}

pub fn run_fields() -> Result<()> {
    print_fields(&mandatory_fields(), &optional_fields());
    Ok(())
}

pub fn run_split(args: &SplitArgs) -> Result<()> {
    let options = SplitOptions {
        max_lines: args.max_lines,
        has_headers: !args.no_headers,
        include_headers: !args.drop_headers,
        headers: args.headers.clone(),
    };
    let files = split_file(&args.input, &options)?;
    println!("{} file(s) written:", files.len());
    for file in files {
        println!("  {}", file.display());
    }
    Ok(())
}

/// One-line description of a rule's validation for the fields listing.
pub fn describe_check(rule: &FieldRule) -> String {
    match (&rule.check, &rule.valid_values) {
        (Some(Check::Pattern(pattern)), _) => format!("pattern {}", pattern.as_str()),
        (Some(Check::Predicate(_)), _) => "predicate".to_string(),
        (Some(Check::DateTime(formats)), _) => format!("date ({})", formats.join(", ")),
        (None, Some(values)) => format!("one of {}", values.join(", ")),
        (None, None) => "-".to_string(),
    }
}
