//! Read-side reconciliation between the metadata store and the blob store.
//!
//! The two stores can diverge (orphaned blobs, dangling rows); these paths
//! tolerate it. Reads filter out rows whose blob is missing and never clean
//! them up. Deletes check the blob first, so a dangling row is not
//! deletable here. The two not-found causes stay distinguishable so an
//! operator can tell which store is inconsistent.

use media::BlobStore;
use pixelvault_core::{StoredFile, VaultError};
use pixelvault_store::ImageStore;
use tracing::debug;

/// All assets present in *both* stores.
///
/// An empty table and a table whose blobs are all missing are reported as
/// different not-found causes.
pub async fn list_photos(
    metadata: &ImageStore,
    blobs: &BlobStore,
) -> Result<Vec<StoredFile>, VaultError> {
    let assets = metadata
        .list_all()
        .await
        .map_err(|e| VaultError::Database(e.to_string()))?;

    if assets.is_empty() {
        return Err(VaultError::NoImages);
    }

    let total = assets.len();
    let mut photos = Vec::with_capacity(total);
    for asset in assets {
        if blobs.exists(&asset.filename).await {
            photos.push(StoredFile::from(asset));
        }
    }

    if photos.len() < total {
        debug!(
            listed = photos.len(),
            skipped = total - photos.len(),
            "Filtered rows with missing blobs from listing"
        );
    }

    if photos.is_empty() {
        return Err(VaultError::NoImagesOnDisk);
    }
    Ok(photos)
}

/// The raw bytes of one asset, located by filename.
pub async fn fetch_photo(
    metadata: &ImageStore,
    blobs: &BlobStore,
    filename: &str,
) -> Result<Vec<u8>, VaultError> {
    let asset = metadata
        .get_by_filename(filename)
        .await
        .map_err(|e| VaultError::Database(e.to_string()))?
        .ok_or_else(|| VaultError::RecordNotFound(filename.to_string()))?;

    if !blobs.exists(&asset.filename).await {
        return Err(VaultError::BlobNotFound(filename.to_string()));
    }

    blobs
        .read(&asset.filename)
        .await
        .map_err(|e| VaultError::Storage(e.to_string()))
}

/// Remove an asset from both stores: blob first, then its metadata rows.
///
/// A metadata delete failure after the blob is gone leaves a dangling row:
/// tolerated, surfaced as a server error, never rolled back.
pub async fn delete_photo(
    metadata: &ImageStore,
    blobs: &BlobStore,
    filename: &str,
) -> Result<(), VaultError> {
    if !blobs.exists(filename).await {
        return Err(VaultError::BlobNotFound(filename.to_string()));
    }

    blobs
        .remove(filename)
        .await
        .map_err(|e| VaultError::Storage(e.to_string()))?;

    metadata
        .delete_by_filename(filename)
        .await
        .map_err(|e| VaultError::Database(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::Arc;

    async fn stores() -> (Arc<ImageStore>, BlobStore) {
        let dir =
            std::env::temp_dir().join(format!("pixelvault-reconcile-{}", uuid::Uuid::new_v4()));
        let blobs = BlobStore::open(dir).await.unwrap();
        let metadata = Arc::new(ImageStore::in_memory().unwrap());
        (metadata, blobs)
    }

    async fn seed(metadata: &ImageStore, blobs: &BlobStore, filename: &str, content: &[u8]) {
        blobs
            .write(filename, &Bytes::copy_from_slice(content))
            .await
            .unwrap();
        metadata
            .insert(filename, &format!("http://localhost:3000/uploads/{filename}"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn fresh_store_lists_nothing() {
        let (metadata, blobs) = stores().await;
        assert!(matches!(
            list_photos(&metadata, &blobs).await,
            Err(VaultError::NoImages)
        ));
        let _ = std::fs::remove_dir_all(blobs.root());
    }

    #[tokio::test]
    async fn listing_filters_missing_blobs_without_repairing() {
        let (metadata, blobs) = stores().await;
        seed(&metadata, &blobs, "1-1.png", b"one").await;
        seed(&metadata, &blobs, "2-2.png", b"two").await;

        // Out-of-band blob removal: the row becomes dangling.
        std::fs::remove_file(blobs.path_of("1-1.png")).unwrap();

        let photos = list_photos(&metadata, &blobs).await.unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].filename, "2-2.png");

        // The dangling row is still in the metadata store: reads filter,
        // they never clean up.
        assert!(metadata.get_by_filename("1-1.png").await.unwrap().is_some());

        let _ = std::fs::remove_dir_all(blobs.root());
    }

    #[tokio::test]
    async fn all_blobs_missing_is_a_distinct_not_found() {
        let (metadata, blobs) = stores().await;
        metadata.insert("ghost.png", "u/ghost.png").await.unwrap();

        assert!(matches!(
            list_photos(&metadata, &blobs).await,
            Err(VaultError::NoImagesOnDisk)
        ));
        let _ = std::fs::remove_dir_all(blobs.root());
    }

    #[tokio::test]
    async fn fetch_returns_stored_bytes() {
        let (metadata, blobs) = stores().await;
        seed(&metadata, &blobs, "3-3.gif", b"GIF89a payload").await;

        let bytes = fetch_photo(&metadata, &blobs, "3-3.gif").await.unwrap();
        assert_eq!(bytes, b"GIF89a payload");
        let _ = std::fs::remove_dir_all(blobs.root());
    }

    #[tokio::test]
    async fn fetch_distinguishes_which_store_is_missing() {
        let (metadata, blobs) = stores().await;

        // No row at all.
        assert!(matches!(
            fetch_photo(&metadata, &blobs, "no-row.png").await,
            Err(VaultError::RecordNotFound(_))
        ));

        // Row present, blob missing.
        metadata.insert("no-blob.png", "u/no-blob.png").await.unwrap();
        assert!(matches!(
            fetch_photo(&metadata, &blobs, "no-blob.png").await,
            Err(VaultError::BlobNotFound(_))
        ));
        let _ = std::fs::remove_dir_all(blobs.root());
    }

    #[tokio::test]
    async fn delete_removes_from_both_stores() {
        let (metadata, blobs) = stores().await;
        seed(&metadata, &blobs, "4-4.jpg", b"jpeg").await;

        delete_photo(&metadata, &blobs, "4-4.jpg").await.unwrap();

        assert!(!blobs.exists("4-4.jpg").await);
        assert!(metadata.get_by_filename("4-4.jpg").await.unwrap().is_none());
        assert!(matches!(
            fetch_photo(&metadata, &blobs, "4-4.jpg").await,
            Err(VaultError::RecordNotFound(_))
        ));
        let _ = std::fs::remove_dir_all(blobs.root());
    }

    #[tokio::test]
    async fn delete_without_blob_leaves_rows_untouched() {
        let (metadata, blobs) = stores().await;
        metadata.insert("dangling.png", "u/dangling.png").await.unwrap();

        assert!(matches!(
            delete_photo(&metadata, &blobs, "dangling.png").await,
            Err(VaultError::BlobNotFound(_))
        ));

        // The dangling row survives: this path never touches metadata when
        // the blob is absent.
        assert!(metadata
            .get_by_filename("dangling.png")
            .await
            .unwrap()
            .is_some());
        let _ = std::fs::remove_dir_all(blobs.root());
    }

    #[tokio::test]
    async fn delete_removes_duplicate_rows() {
        let (metadata, blobs) = stores().await;
        seed(&metadata, &blobs, "dup.png", b"x").await;
        metadata.insert("dup.png", "u/dup-again.png").await.unwrap();

        delete_photo(&metadata, &blobs, "dup.png").await.unwrap();
        assert_eq!(metadata.count().await.unwrap(), 0);
        let _ = std::fs::remove_dir_all(blobs.root());
    }
}
