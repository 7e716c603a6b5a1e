//! File collection: expanding CLI path arguments into a flat file list.
//!
//! Each argument is either a file (taken as-is) or a directory. Directories
//! expand to the regular files directly inside them, or to the whole subtree
//! with the recursive flag. Hidden entries (dot-prefixed names) are skipped
//! during directory expansion; explicitly listed files are never filtered.
//!
//! The final list is sorted lexicographically so processing order is stable
//! regardless of argument order or filesystem enumeration order.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("No such file or directory: {0}")]
    NotFound(PathBuf),
}

/// Expand `paths` into a flat, sorted list of regular files.
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, CollectError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            if recursive {
                collect_recursive(path, &mut files)?;
            } else {
                collect_flat(path, &mut files)?;
            }
        } else {
            return Err(CollectError::NotFound(path.clone()));
        }
    }

    files.sort();
    Ok(files)
}

fn collect_flat(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CollectError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && !is_hidden(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn collect_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CollectError> {
    let walker = WalkDir::new(dir)
        .into_iter()
        // depth 0 is the directory argument itself; never filter that out
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn explicit_files_taken_as_is() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.jpg");
        fs::write(&a, "x").unwrap();

        let files = collect_files(&[a.clone()], false).unwrap();
        assert_eq!(files, vec![a]);
    }

    #[test]
    fn directory_expands_to_its_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.jpg"), "x").unwrap();
        fs::write(tmp.path().join("a.jpg"), "x").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/c.jpg"), "x").unwrap();

        let files = collect_files(&[tmp.path().to_path_buf()], false).unwrap();
        assert_eq!(names(&files), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn recursive_descends_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.jpg"), "x").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/c.jpg"), "x").unwrap();

        let files = collect_files(&[tmp.path().to_path_buf()], true).unwrap();
        assert_eq!(names(&files), vec!["a.jpg", "c.jpg"]);
    }

    #[test]
    fn hidden_entries_skipped_during_expansion() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.jpg"), "x").unwrap();
        fs::write(tmp.path().join(".hidden.jpg"), "x").unwrap();
        fs::create_dir(tmp.path().join(".cache")).unwrap();
        fs::write(tmp.path().join(".cache/d.jpg"), "x").unwrap();

        let flat = collect_files(&[tmp.path().to_path_buf()], false).unwrap();
        assert_eq!(names(&flat), vec!["a.jpg"]);

        let deep = collect_files(&[tmp.path().to_path_buf()], true).unwrap();
        assert_eq!(names(&deep), vec!["a.jpg"]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.jpg");

        let result = collect_files(&[missing], false);
        assert!(matches!(result, Err(CollectError::NotFound(_))));
    }

    #[test]
    fn result_is_sorted_across_arguments() {
        let tmp = TempDir::new().unwrap();
        let b = tmp.path().join("b.jpg");
        let a = tmp.path().join("a.jpg");
        fs::write(&b, "x").unwrap();
        fs::write(&a, "x").unwrap();

        let files = collect_files(&[b.clone(), a.clone()], false).unwrap();
        assert_eq!(files, vec![a, b]);
    }
}
