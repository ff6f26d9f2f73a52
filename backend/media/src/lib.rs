//! Blob storage for uploaded images.
//!
//! Owns the upload directory: byte writes, existence checks, reads, and
//! removals all go through [`BlobStore`]. Also provides MIME detection and
//! the HTTP router that serves blobs statically.

pub mod blob_store;
pub mod mime_detect;
pub mod serve;

pub use blob_store::BlobStore;
pub use mime_detect::{detect_mime_type, is_image, is_inline_safe};
pub use serve::uploads_router;
