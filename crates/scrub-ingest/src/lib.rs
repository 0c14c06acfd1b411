pub mod chunk_table;
pub mod polars_utils;
pub mod split;

pub use chunk_table::{frame_from_columns, normalize_cell, normalize_header, read_chunk};
pub use polars_utils::{any_to_i64, any_to_string, is_missing_value, opt_str};
pub use split::{SplitOptions, split_file};
