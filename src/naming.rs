//! Target-path naming conventions.
//!
//! All output paths follow one of two patterns:
//!
//! - **Suffixed sibling**: the source name with a suffix inserted before the
//!   extension, next to the source. `photo.jpg` + `-web` → `photo-web.jpg`.
//!   Used by the web and resize commands, which never touch the source.
//! - **Day-sequence name**: `<dir>/<YYYY-MM-DD>#<NNN><ext>` where `NNN` is a
//!   1-based index zero-padded to three digits. Used by the rename command.
//!
//! This module also owns the JPEG extension check, since several handlers
//! branch on it to pick the JPEG-specific tool over the generic one.

use std::path::{Path, PathBuf};

/// Whether a path has a JPEG extension (`.jpg` / `.jpeg`, case-insensitive).
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|e| e == "jpg" || e == "jpeg")
        .unwrap_or(false)
}

/// Build a sibling path with `suffix` inserted before the extension.
///
/// - `photo.jpg` + `-web` → `photo-web.jpg`
/// - `photo.jpg` + `-800x600` → `photo-800x600.jpg`
/// - `photo` + `-web` → `photo-web` (no extension, suffix appended)
pub fn suffixed_sibling(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}{ext}"))
}

/// Build a day-sequence name beside `path`: `<dir>/<day>#<index 3-digit><ext>`.
///
/// The original extension is preserved verbatim, including its case.
pub fn sequence_name(path: &Path, day: &str, index: u32) -> PathBuf {
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    path.with_file_name(format!("{day}#{index:03}{ext}"))
}
