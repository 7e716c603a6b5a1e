//! Prepare-for-web conversion.
//!
//! Writes a `-web` sibling of each source file with all metadata stripped and
//! the quality reduced (default 50). The source is never modified. An
//! existing target triggers the overwrite prompt unless `--yes` was given.

use std::path::PathBuf;
use thiserror::Error;

use crate::exec::{ExecError, Executor};
use crate::naming::suffixed_sibling;
use crate::options::Options;
use crate::prompt::{overwrite_allowed, Prompter};
use crate::tools;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Tool error: {0}")]
    Exec(#[from] ExecError),
}

/// Convert every file to its stripped, recompressed `-web` sibling.
pub fn web(
    exec: &Executor,
    files: &[PathBuf],
    opts: &Options,
    prompter: &mut dyn Prompter,
) -> Result<(), WebError> {
    for file in files {
        let target = suffixed_sibling(file, "-web");
        println!(
            "Prepare for web: {} -> {}",
            file.display(),
            target.display()
        );
        if overwrite_allowed(&target, opts, prompter)? {
            exec.run(&tools::convert_web(file, opts.quality, &target))?;
        }
    }
    Ok(())
}
