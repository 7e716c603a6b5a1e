//! Fixed-degree and EXIF-orientation rotation.
//!
//! ## Lossless First, Lossy Fallback
//!
//! JPEG files are first handed to `jpegtran -perfect`, which re-orders
//! compressed blocks without re-encoding but refuses (non-zero exit) when the
//! image dimensions are not block-aligned. On refusal, or for non-JPEG
//! input, the file is re-encoded by `mogrify` at quality 100, unless
//! `--lossless-only` was given, in which case the file is skipped untouched.
//!
//! ## Degree Normalization
//!
//! jpegtran and mogrify disagree on how to express the same physical
//! rotation, so the signed input degrees are normalized per tool:
//!
//! | input | jpegtran | mogrify (fallback) |
//! |-------|----------|--------------------|
//! | 90    | 90       | 90                 |
//! | 180   | 180      | 180                |
//! | 270   | 270      | -90                |
//! | -90   | 270      | -90                |
//! | -180  | 180      | 180                |
//! | -270  | 90       | —                  |
//!
//! ## Auto-Rotation
//!
//! `auto-rotate` reads the EXIF orientation code per file and maps it to
//! degrees (3→180, 6→90, 8→270; see <http://jpegclub.org/exif_orientation.html>).
//! After a real rotation the orientation flag is cleared so viewers do not
//! apply it a second time to the already-rotated pixels. Mirrored orientation
//! codes (2, 4, 5, 7) are deliberately treated as "no rotation".

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::exec::{ExecError, Executor};
use crate::naming::is_jpeg;
use crate::options::Options;
use crate::tools;

#[derive(Error, Debug)]
pub enum RotateError {
    #[error("Tool error: {0}")]
    Exec(#[from] ExecError),
}

/// Normalize signed degrees to the positive range `jpegtran -rotate` accepts.
///
/// `None` for values jpegtran cannot rotate by.
pub fn lossless_degrees(degrees: i32) -> Option<u32> {
    match degrees {
        90 | -270 => Some(90),
        180 | -180 => Some(180),
        270 | -90 => Some(270),
        _ => None,
    }
}

/// Normalize signed degrees for the lossy `mogrify` fallback, which expresses
/// 270° clockwise as -90.
pub fn lossy_degrees(degrees: i32) -> Option<i32> {
    match degrees {
        90 => Some(90),
        180 | -180 => Some(180),
        270 | -90 => Some(-90),
        _ => None,
    }
}

/// Map an EXIF orientation code (as printed by `jpegexiforient -n`) to
/// clockwise degrees.
///
/// `None` means no tag present: skip the file. `Some(0)` means upright (code
/// 1) or a mirrored/unknown code that gets no rotation.
pub fn orientation_degrees(code: &str) -> Option<i32> {
    match code {
        "" => None,
        "3" => Some(180),
        "6" => Some(90),
        "8" => Some(270),
        _ => Some(0),
    }
}

/// Rotate one file: lossless attempt for JPEGs, lossy fallback otherwise.
fn rotate_file(
    exec: &Executor,
    file: &Path,
    degrees: i32,
    opts: &Options,
) -> Result<(), RotateError> {
    if is_jpeg(file)
        && let Some(d) = lossless_degrees(degrees)
        && exec.try_run(&tools::jpegtran_rotate(file, d))?
    {
        return Ok(());
    }

    if opts.lossless_only {
        println!("Skipping file: {}", file.display());
        return Ok(());
    }

    if let Some(d) = lossy_degrees(degrees) {
        exec.run(&tools::mogrify_rotate(file, d))?;
    }
    Ok(())
}

/// Rotate every file by the fixed degree value in `opts.degrees`.
pub fn rotate(exec: &Executor, files: &[PathBuf], opts: &Options) -> Result<(), RotateError> {
    for file in files {
        println!("Rotate {}: {}", opts.degrees, file.display());
        rotate_file(exec, file, opts.degrees, opts)?;
    }
    Ok(())
}

/// Rotate every JPEG by its embedded EXIF orientation, then clear the flag.
pub fn auto_rotate(exec: &Executor, files: &[PathBuf], opts: &Options) -> Result<(), RotateError> {
    for file in files {
        if !is_jpeg(file) {
            // Orientation reading is JPEG-specific
            if opts.verbose {
                println!("Skipping non JPG file: {}", file.display());
            }
            continue;
        }

        let code = exec.capture(&tools::read_orientation(file))?;
        let Some(degrees) = orientation_degrees(&code) else {
            if opts.verbose {
                println!("No Exif orientation set: {}", file.display());
            }
            continue;
        };

        if degrees == 0 {
            if opts.verbose {
                println!("No rotation necessary: {}", file.display());
            }
            continue;
        }

        println!("Rotate {}: {}", degrees, file.display());
        rotate_file(exec, file, degrees, opts)?;
        // The pixels are upright now; a stale flag would rotate them again.
        exec.run(&tools::jhead_clear_orientation(file))?;
    }
    Ok(())
}
