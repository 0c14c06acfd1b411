//! Split a large text file into bounded chunk files.
//!
//! Chunks are self-contained: with header replication enabled every output
//! file starts with the header line, so each one can be scrubbed
//! independently.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Maximum lines per output file, header included.
    pub max_lines: usize,
    /// The input's first line is a header row.
    pub has_headers: bool,
    /// Repeat the header at the top of every output file.
    pub include_headers: bool,
    /// Header override, for input without headers or to rename columns.
    pub headers: Option<String>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_lines: 1_000_000,
            has_headers: true,
            include_headers: true,
            headers: None,
        }
    }
}

/// Split `path` into sibling files named `<stem>_001.<ext>`, `<stem>_002.<ext>`
/// and so on. Returns the paths written, in order.
pub fn split_file(path: &Path, options: &SplitOptions) -> Result<Vec<PathBuf>> {
    info!(
        file = %path.display(),
        max_lines = options.max_lines,
        has_headers = options.has_headers,
        include_headers = options.include_headers,
        "splitting file"
    );
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let mut header = options.headers.clone();
    if options.has_headers {
        let first = lines.next().transpose()?;
        if options.include_headers && header.is_none() {
            header = first;
        }
    }
    let replicate = if options.include_headers {
        header
    } else {
        None
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chunk".to_string());
    let extension = path.extension().map(|s| s.to_string_lossy().into_owned());
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut split_files = Vec::new();
    let mut writer: Option<BufWriter<File>> = None;
    let mut line_count = 0usize;
    let mut file_count = 0usize;

    for line in lines {
        let line = line?;
        if line_count % options.max_lines == 0 {
            file_count += 1;
            line_count = if replicate.is_some() { 1 } else { 0 };
            let name = match &extension {
                Some(ext) => format!("{stem}_{file_count:03}.{ext}"),
                None => format!("{stem}_{file_count:03}"),
            };
            let out_path = parent.join(name);
            info!(file = %out_path.display(), "writing split file");
            let mut out = BufWriter::new(
                File::create(&out_path).with_context(|| format!("create {}", out_path.display()))?,
            );
            if let Some(header) = &replicate {
                writeln!(out, "{header}")?;
            }
            split_files.push(out_path);
            writer = Some(out);
        }
        let out = writer.as_mut().expect("split writer is open");
        writeln!(out, "{line}")?;
        line_count += 1;
    }
    if let Some(mut out) = writer {
        out.flush()?;
    }
    Ok(split_files)
}
