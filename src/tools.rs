//! Argument-vector builders for the external tool contracts.
//!
//! Each function assembles the exact command line for one documented tool
//! invocation. Nothing here spawns a process; that is [`crate::exec`]'s job.
//! Keeping the builders pure means the contracts are asserted byte-for-byte
//! in tests.

use crate::exec::ToolCommand;
use std::path::Path;

fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// `jpegtran -copy all -rotate <degrees> -outfile <file> -perfect <file>`
///
/// In-place lossless rotation keeping all metadata. `-perfect` makes jpegtran
/// refuse (non-zero exit) instead of silently trimming non-block-aligned
/// edges.
pub fn jpegtran_rotate(file: &Path, degrees: u32) -> ToolCommand {
    ToolCommand::new(
        "jpegtran",
        vec![
            "-copy".into(),
            "all".into(),
            "-rotate".into(),
            degrees.to_string(),
            "-outfile".into(),
            arg(file),
            "-perfect".into(),
            arg(file),
        ],
    )
}

/// Lossy in-place rotation: `mogrify -rotate <degrees> -quality 100 <file>`.
pub fn mogrify_rotate(file: &Path, degrees: i32) -> ToolCommand {
    ToolCommand::new(
        "mogrify",
        vec![
            "-rotate".into(),
            degrees.to_string(),
            "-quality".into(),
            "100".into(),
            arg(file),
        ],
    )
}

/// Generic in-place metadata strip: `mogrify -strip <file>`.
pub fn mogrify_strip(file: &Path) -> ToolCommand {
    ToolCommand::new("mogrify", vec!["-strip".into(), arg(file)])
}

/// `convert <source> -strip -quality <quality> <target>`
pub fn convert_web(source: &Path, quality: u32, target: &Path) -> ToolCommand {
    ToolCommand::new(
        "convert",
        vec![
            arg(source),
            "-strip".into(),
            "-quality".into(),
            quality.to_string(),
            arg(target),
        ],
    )
}

/// `convert <source> -resize <size> -quality 100 <target>`
///
/// `size` passes through untouched; ImageMagick's geometry syntax is the
/// contract (`300`, `x200`, `300x200`, `300x200!`).
pub fn convert_resize(source: &Path, size: &str, target: &Path) -> ToolCommand {
    ToolCommand::new(
        "convert",
        vec![
            arg(source),
            "-resize".into(),
            size.to_string(),
            "-quality".into(),
            "100".into(),
            arg(target),
        ],
    )
}

/// `jhead -q -purejpg <file>`
///
/// Strips everything that is not needed for a valid JPEG.
pub fn jhead_strip(file: &Path) -> ToolCommand {
    ToolCommand::new("jhead", vec!["-q".into(), "-purejpg".into(), arg(file)])
}

/// `jhead -q -norot <file>`
///
/// Clears the EXIF orientation flag after the pixel data has been physically
/// rotated.
pub fn jhead_clear_orientation(file: &Path) -> ToolCommand {
    ToolCommand::new("jhead", vec!["-q".into(), "-norot".into(), arg(file)])
}

/// `jhead -q -ft <file>`
///
/// Sets the file modification time from the EXIF capture date.
pub fn jhead_time_from_exif(file: &Path) -> ToolCommand {
    ToolCommand::new("jhead", vec!["-q".into(), "-ft".into(), arg(file)])
}

/// `jpegexiforient -n <file>`
///
/// Prints the bare orientation code, or nothing when no tag is present.
pub fn read_orientation(file: &Path) -> ToolCommand {
    ToolCommand::new("jpegexiforient", vec!["-n".into(), arg(file)])
}
