//! # photoprep
//!
//! Batch preparation of photo files for archiving and publishing. Every
//! operation is a thin sequence over a file list: decide which external tool
//! to invoke with which arguments, invoke it, print a status line.
//!
//! # External Tools
//!
//! photoprep does not decode or re-encode images itself. It drives four
//! battle-tested command-line tools and treats their CLIs as the contract:
//!
//! | Tool | Used for |
//! |------|----------|
//! | `jpegtran` | Lossless JPEG rotation (`-perfect` block-aligned transforms) |
//! | `convert` / `mogrify` (ImageMagick) | Lossy rotation, recompression, resizing, generic metadata stripping |
//! | `jhead` | EXIF stripping, orientation-flag clearing, mtime-from-capture-date |
//! | `jpegexiforient` | Reading the EXIF orientation code |
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`options`] | Flat per-invocation options record shared by all handlers |
//! | [`collect`] | Expands file/directory arguments into a flat, sorted file list |
//! | [`exec`] | Subprocess boundary: [`exec::ToolRunner`] trait plus dry-run/verbose wrapper |
//! | [`tools`] | Pure argument-vector builders for the external tool contracts |
//! | [`naming`] | Target-path conventions: suffixed siblings, day-sequence names |
//! | [`prompt`] | Overwrite-confirmation prompting behind the [`prompt::Prompter`] trait |
//! | [`rotate`] | Fixed-degree and EXIF-orientation rotation with lossless→lossy fallback |
//! | [`web`] | Prepare-for-web: strip metadata and recompress to a `-web` sibling |
//! | [`resize`] | Resize to a `-<size>` sibling |
//! | [`exif`] | Strip EXIF tags in place |
//! | [`rename`] | Rename by capture date with a day-bucketed sequence index |
//!
//! # Design Decisions
//!
//! ## Decide vs. Invoke
//!
//! The one structural rule: "decide what to do" (degree normalization,
//! orientation mapping, date bucketing, target-path computation) is pure and
//! lives apart from "actually run the tool", which sits behind the narrow
//! [`exec::ToolRunner`] trait. Unit tests exercise every decision path against
//! a recording mock without spawning a single subprocess.
//!
//! ## Lossless First
//!
//! JPEG rotation can re-order compressed blocks without re-encoding when the
//! image dimensions are block-aligned. photoprep always asks `jpegtran` for a
//! `-perfect` transform first and only falls back to a pixel-level re-encode
//! when jpegtran refuses. This is the sole place where a non-zero tool exit is
//! tolerated rather than fatal.
//!
//! ## Strictly Sequential
//!
//! One file at a time, one child process at a time, synchronous wait. There
//! is no shared mutable state across files except the day/index counter
//! inside the rename pass, so there is nothing to lock.

pub mod collect;
pub mod exec;
pub mod exif;
pub mod naming;
pub mod options;
pub mod prompt;
pub mod rename;
pub mod resize;
pub mod rotate;
pub mod tools;
pub mod web;
