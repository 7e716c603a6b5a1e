//! In-place EXIF removal.
//!
//! JPEG files go through `jhead -purejpg`, which strips everything not needed
//! for a valid JPEG. Everything else gets ImageMagick's generic `-strip`.
//! Destructive by design: no output path, no overwrite prompt.

use std::path::PathBuf;

use crate::exec::{ExecError, Executor};
use crate::naming::is_jpeg;
use crate::tools;

/// Strip EXIF tags from every file, in place.
pub fn remove_exif(exec: &Executor, files: &[PathBuf]) -> Result<(), ExecError> {
    for file in files {
        println!("Remove Exif: {}", file.display());
        if is_jpeg(file) {
            exec.run(&tools::jhead_strip(file))?;
        } else {
            exec.run(&tools::mogrify_strip(file))?;
        }
    }
    Ok(())
}
