//! CLI argument definitions for the crime scrubber.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crime-scrubber",
    version,
    about = "Clean and validate municipal crime record chunks",
    long_about = "Clean and validate one chunk of municipal crime records.\n\n\
                  Applies per-column validation rules, excludes rows with bad\n\
                  mandatory fields, nulls bad optional fields, and writes clean\n\
                  data plus hard- and soft-reject reports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrub one chunk of records and write the output artifacts.
    Chunk(ChunkArgs),

    /// List the configured field rules.
    Fields,

    /// Split a large input file into bounded chunk files.
    Split(SplitArgs),
}

#[derive(Parser)]
pub struct ChunkArgs {
    /// Path to the chunk CSV file.
    #[arg(value_name = "CHUNK_FILE")]
    pub input: PathBuf,

    /// Chunk identifier used in reports (default: the input file name).
    #[arg(long = "chunk-id", value_name = "ID")]
    pub chunk_id: Option<String>,

    /// Output directory for artifacts (default: <CHUNK_FILE dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Path to the file to split.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Maximum lines per output file, header included.
    #[arg(long = "max-lines", value_name = "N", default_value_t = 1_000_000)]
    pub max_lines: usize,

    /// The input has no header row.
    #[arg(long = "no-headers")]
    pub no_headers: bool,

    /// Do not repeat the header in each output file.
    #[arg(long = "drop-headers")]
    pub drop_headers: bool,

    /// Header line override (for headerless input or to rename columns).
    #[arg(long = "headers", value_name = "LINE")]
    pub headers: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
