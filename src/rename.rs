//! Renaming by capture date.
//!
//! Files are renamed to `<YYYY-MM-DD>#<NNN><ext>` where the date is the UTC
//! calendar day of the file's modification time and `NNN` is a 1-based
//! sequence index within that day.
//!
//! For JPEG files, `jhead -ft` first sets the modification time from the EXIF
//! capture date, so the subsequent mtime sort reflects capture order wherever
//! that tag exists. Non-JPEG files keep whatever mtime the filesystem
//! reports. The sort is stable, so files sharing an mtime stay in their
//! incoming (lexicographic) order.
//!
//! The day/index counter is the only cross-iteration state in the whole
//! program: it resets to 1 whenever the calendar day changes along the sorted
//! list.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use chrono::{DateTime, Utc};

use crate::exec::{ExecError, Executor};
use crate::naming::{is_jpeg, sequence_name};
use crate::options::Options;
use crate::prompt::{overwrite_allowed, Prompter};
use crate::tools;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Tool error: {0}")]
    Exec(#[from] ExecError),
}

/// Assign day-bucketed sequence targets to files already sorted by time.
///
/// Pure: takes (path, time) pairs, returns (source, target) pairs. The index
/// restarts at 1 whenever the UTC calendar day changes.
pub fn assign_targets(files: &[(PathBuf, DateTime<Utc>)]) -> Vec<(PathBuf, PathBuf)> {
    let mut targets = Vec::with_capacity(files.len());
    let mut current_day: Option<String> = None;
    let mut index = 0u32;

    for (path, time) in files {
        let day = time.format("%Y-%m-%d").to_string();
        if current_day.as_deref() == Some(day.as_str()) {
            index += 1;
        } else {
            current_day = Some(day.clone());
            index = 1;
        }
        targets.push((path.clone(), sequence_name(path, &day, index)));
    }

    targets
}

/// Rename every file by capture date.
pub fn rename(
    exec: &Executor,
    files: &[PathBuf],
    opts: &Options,
    prompter: &mut dyn Prompter,
) -> Result<(), RenameError> {
    // Pull EXIF capture dates into mtimes first so the sort below reflects
    // capture order for files that expose the tag.
    for file in files {
        if is_jpeg(file) {
            exec.run(&tools::jhead_time_from_exif(file))?;
        }
    }

    let mut dated = files
        .iter()
        .map(|file| -> Result<_, RenameError> {
            let mtime = fs::metadata(file)?.modified()?;
            Ok((file.clone(), DateTime::<Utc>::from(mtime)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    dated.sort_by_key(|(_, time)| *time);

    for (source, target) in assign_targets(&dated) {
        println!("Rename: {} -> {}", source.display(), target.display());
        if source == target {
            println!("Nothing to do");
            continue;
        }
        if !overwrite_allowed(&target, opts, prompter)? {
            continue;
        }
        if !exec.dry_run() {
            fs::rename(&source, &target)?;
        }
    }
    Ok(())
}
