//! `pixelvault-ingest` — the upload path.
//!
//! Validates incoming file payloads, assigns generated blob names, and runs
//! the write-both sequence: blob bytes first, metadata row second.

pub mod naming;
pub mod pipeline;
pub mod validate;

pub use naming::generate_filename;
pub use pipeline::IngestPipeline;
pub use validate::{validate_upload, ALLOWED_EXTENSIONS, MAX_FILE_SIZE_BYTES};
