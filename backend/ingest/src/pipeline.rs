//! The write-both ingest pipeline.
//!
//! For each accepted file: blob bytes are written first; only on a
//! successful write is the metadata row inserted. A failed insert is logged
//! and NOT rolled back. The blob stays on disk as an orphan, invisible to
//! readers (reads are metadata-driven), and the file is still reported in
//! the success response. There is no cross-store transaction and no retry.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info};

use media::BlobStore;
use pixelvault_core::{StoredFile, UploadedFile, VaultError};
use pixelvault_store::ImageStore;

use crate::naming::generate_filename;
use crate::validate::validate_upload;

pub struct IngestPipeline {
    blobs: BlobStore,
    metadata: Arc<ImageStore>,
    base_url: String,
}

impl IngestPipeline {
    pub fn new(blobs: BlobStore, metadata: Arc<ImageStore>, base_url: impl Into<String>) -> Self {
        Self {
            blobs,
            metadata,
            base_url: base_url.into(),
        }
    }

    /// Ingest a whole upload request.
    ///
    /// Validation failure rejects the request with nothing persisted. After
    /// validation, each file is written blob-first; a blob write failure
    /// aborts the request (files already written stay, as tolerated
    /// divergence), while a metadata insert failure is logged and skipped.
    pub async fn ingest(&self, files: Vec<UploadedFile>) -> Result<Vec<StoredFile>, VaultError> {
        validate_upload(&files)?;

        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            let filename = generate_filename(file.extension());
            let bytes = Bytes::from(file.bytes);

            self.blobs
                .write(&filename, &bytes)
                .await
                .map_err(|e| VaultError::Storage(e.to_string()))?;

            let url = format!("{}/uploads/{}", self.base_url, filename);
            if let Err(e) = self.metadata.insert(&filename, &url).await {
                // Tolerated divergence: the blob is already on disk and is
                // left there. The row never existed, so readers skip it.
                error!(filename = %filename, error = %e, "Failed to insert image row");
            }

            stored.push(StoredFile { filename, url });
        }

        info!(count = stored.len(), "Ingested upload request");
        Ok(stored)
    }
}
