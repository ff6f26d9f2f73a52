//! Upload validation.
//!
//! One pass over the whole request, one typed result. Any failure rejects
//! the entire request before a single byte is persisted.

use pixelvault_core::{UploadedFile, VaultError};

/// Accepted original-name extensions. Exact matches only.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "jpg", "JPG", "jpeg", "JPEG", "png", "PNG", "gif", "GIF",
];

/// Maximum size of a single uploaded file: 50 MiB.
pub const MAX_FILE_SIZE_BYTES: usize = 50 * 1024 * 1024;

/// Validate a whole upload request.
///
/// Checks, in order: the request carries at least one file, every file's
/// extension is allow-listed, and no file exceeds the size cap. The first
/// violation fails the request.
pub fn validate_upload(files: &[UploadedFile]) -> Result<(), VaultError> {
    if files.is_empty() {
        return Err(VaultError::NoFilesSelected);
    }

    for file in files {
        if !ALLOWED_EXTENSIONS.contains(&file.extension()) {
            return Err(VaultError::InvalidExtension(file.original_name.clone()));
        }
        if file.bytes.len() > MAX_FILE_SIZE_BYTES {
            return Err(VaultError::FileTooLarge {
                filename: file.original_name.clone(),
                size: file.bytes.len(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_extensions() {
        for name in ["a.jpg", "b.JPG", "c.jpeg", "d.JPEG", "e.png", "f.PNG", "g.gif", "h.GIF"] {
            let files = vec![UploadedFile::new(name, vec![1, 2, 3])];
            assert!(validate_upload(&files).is_ok(), "expected {name} accepted");
        }
    }

    #[test]
    fn rejects_disallowed_extension() {
        let files = vec![UploadedFile::new("photo.exe", vec![1, 2, 3])];
        assert!(matches!(
            validate_upload(&files),
            Err(VaultError::InvalidExtension(name)) if name == "photo.exe"
        ));
    }

    #[test]
    fn rejects_mixed_case_not_in_list() {
        // Only the exact variants are allowed; "Png" is not one of them.
        let files = vec![UploadedFile::new("photo.Png", vec![1])];
        assert!(matches!(
            validate_upload(&files),
            Err(VaultError::InvalidExtension(_))
        ));
    }

    #[test]
    fn rejects_missing_extension() {
        let files = vec![UploadedFile::new("photo", vec![1])];
        assert!(matches!(
            validate_upload(&files),
            Err(VaultError::InvalidExtension(_))
        ));
    }

    #[test]
    fn rejects_empty_request() {
        assert!(matches!(
            validate_upload(&[]),
            Err(VaultError::NoFilesSelected)
        ));
    }

    #[test]
    fn rejects_oversized_file() {
        let files = vec![UploadedFile::new(
            "big.png",
            vec![0u8; MAX_FILE_SIZE_BYTES + 1],
        )];
        assert!(matches!(
            validate_upload(&files),
            Err(VaultError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn one_bad_file_fails_the_whole_request() {
        let files = vec![
            UploadedFile::new("ok.png", vec![1]),
            UploadedFile::new("bad.exe", vec![2]),
        ];
        assert!(validate_upload(&files).is_err());
    }

    #[test]
    fn size_cap_is_inclusive() {
        let files = vec![UploadedFile::new("edge.gif", vec![0u8; MAX_FILE_SIZE_BYTES])];
        assert!(validate_upload(&files).is_ok());
    }
}
