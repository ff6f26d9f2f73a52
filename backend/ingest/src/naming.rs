//! Blob name generation.
//!
//! Stored names are never derived from user-supplied names (which would
//! invite collisions and path traversal). Each accepted file gets
//! `<epoch-millis>-<random>` with the original extension appended. Collision
//! probability is treated as negligible; no check is performed.

use rand::Rng;

/// Generate a unique blob filename carrying the given extension.
///
/// The extension is passed without its dot; an empty extension yields a
/// bare name (validation upstream rejects those for uploads).
pub fn generate_filename(extension: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    if extension.is_empty() {
        format!("{millis}-{random}")
    } else {
        format!("{millis}-{random}.{extension}")
    }
}
