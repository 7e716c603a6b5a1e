//! Resizing to a suffixed sibling.
//!
//! Same pattern as [`crate::web`] with the size string doubling as the target
//! suffix: `a.jpg` resized to `300x200` lands in `a-300x200.jpg`. Quality is
//! fixed at 100 so resizing does not also recompress.

use std::path::PathBuf;
use thiserror::Error;

use crate::exec::{ExecError, Executor};
use crate::naming::suffixed_sibling;
use crate::options::Options;
use crate::prompt::{overwrite_allowed, Prompter};
use crate::tools;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Tool error: {0}")]
    Exec(#[from] ExecError),
}

/// Resize every file to a `-<size>` sibling.
pub fn resize(
    exec: &Executor,
    files: &[PathBuf],
    opts: &Options,
    prompter: &mut dyn Prompter,
) -> Result<(), ResizeError> {
    for file in files {
        let target = suffixed_sibling(file, &format!("-{}", opts.size));
        println!("Resize: {} -> {}", file.display(), target.display());
        if overwrite_allowed(&target, opts, prompter)? {
            exec.run(&tools::convert_resize(file, &opts.size, &target))?;
        }
    }
    Ok(())
}
