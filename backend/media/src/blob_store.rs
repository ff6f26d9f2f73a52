//! Filesystem blob store.
//!
//! A directory on durable storage holding uploaded files under generated
//! names. Content is immutable after write; there is no partial-update API.
//! The store knows nothing about metadata rows; reconciling the two is the
//! callers' job.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Open the blob store, creating the directory if absent.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create upload directory: {}", root.display()))?;
        info!(dir = %root.display(), "Blob store ready");
        Ok(Self { root })
    }

    /// The directory this store owns.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a blob by filename.
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Write blob bytes under the given filename.
    pub async fn write(&self, filename: &str, bytes: &Bytes) -> Result<()> {
        let path = self.path_of(filename);
        fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write blob: {}", path.display()))?;
        debug!(filename = %filename, size = bytes.len(), "Wrote blob");
        Ok(())
    }

    /// Whether a blob with this filename is present on disk.
    pub async fn exists(&self, filename: &str) -> bool {
        fs::try_exists(self.path_of(filename)).await.unwrap_or(false)
    }

    /// Read a blob's full content.
    pub async fn read(&self, filename: &str) -> Result<Vec<u8>> {
        let path = self.path_of(filename);
        fs::read(&path)
            .await
            .with_context(|| format!("Failed to read blob: {}", path.display()))
    }

    /// Remove a blob from disk.
    pub async fn remove(&self, filename: &str) -> Result<()> {
        let path = self.path_of(filename);
        fs::remove_file(&path)
            .await
            .with_context(|| format!("Failed to remove blob: {}", path.display()))?;
        debug!(filename = %filename, "Removed blob");
        Ok(())
    }
}
