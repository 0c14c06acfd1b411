pub mod summary;
pub mod writer;

pub use summary::{summary_payload, write_summary_json};
pub use writer::{ChunkArtifacts, chunk_stem, write_chunk_outputs};
