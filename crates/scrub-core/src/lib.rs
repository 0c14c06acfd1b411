pub mod analyze;
pub mod datetime;
pub mod field_processor;
pub mod frame_utils;
pub mod phases;
pub mod pipeline;
pub mod rules;

pub use analyze::{analyze_rejects, build_reject_frame};
pub use datetime::{KNOWN_DATE_FORMATS, parse_record_datetime, parse_with_formats};
pub use field_processor::{FieldMode, FieldOutcome, process_field};
pub use phases::{apply_hard_rejects, apply_soft_rejects, validate_rule_sets};
pub use pipeline::{ChunkOutcome, scrub_chunk};
pub use rules::{RETAINED_COLUMNS, mandatory_fields, optional_fields};
