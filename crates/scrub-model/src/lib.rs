pub mod error;
pub mod reject;
pub mod report;
pub mod rule;

pub use error::{Result, ScrubError};
pub use reject::{RejectRecord, RowId};
pub use report::{FieldRejectCount, ScrubSummaryPayload};
pub use rule::{
    Check, DeriveColumns, FieldRule, GeneratedColumn, Generator, PostProcess, Transform,
    ValuePredicate, ValueTransform,
};

/// Row-identity column added to every chunk at load time. Holds the 0-based
/// position of the row in the source file and survives row removal.
pub const FILE_INDEX_COLUMN: &str = "file_index";

/// Suffix of the companion column holding a field's original value for rows
/// where the field was nulled.
pub const ORIG_SUFFIX: &str = "_orig";

/// Reject report column naming the source chunk.
pub const FILE_NAME_COLUMN: &str = "file_name";

/// Reject report column listing the offending field names.
pub const OFFENDING_COLS_COLUMN: &str = "cols";
