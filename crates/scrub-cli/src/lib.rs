//! CLI library components for the crime scrubber.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
