//! MIME type detection for stored blobs.
//!
//! Used when serving blobs back so browsers render them instead of
//! downloading opaque bytes.

use std::path::Path;

/// Detect MIME type by file extension.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "svg"          => "image/svg+xml",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",

        _              => "application/octet-stream",
    }
}

/// Whether a MIME type is for an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Whether a file is safe to serve inline (not just download).
pub fn is_inline_safe(mime: &str) -> bool {
    matches!(
        mime,
        "image/jpeg" | "image/png" | "image/gif" | "image/webp"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_jpeg() {
        assert_eq!(detect_mime_type(&PathBuf::from("photo.jpg")), "image/jpeg");
        assert_eq!(detect_mime_type(&PathBuf::from("photo.JPEG")), "image/jpeg");
    }

    #[test]
    fn detects_png_and_gif() {
        assert_eq!(detect_mime_type(&PathBuf::from("1712-42.png")), "image/png");
        assert_eq!(detect_mime_type(&PathBuf::from("1712-42.gif")), "image/gif");
    }

    #[test]
    fn unknown_extension_fallback() {
        assert_eq!(
            detect_mime_type(&PathBuf::from("file.xyz")),
            "application/octet-stream"
        );
    }

    #[test]
    fn inline_safety() {
        assert!(is_inline_safe("image/png"));
        assert!(!is_inline_safe("image/svg+xml"));
        assert!(!is_inline_safe("application/octet-stream"));
    }
}
