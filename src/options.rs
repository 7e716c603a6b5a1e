//! Per-invocation options shared by every command handler.
//!
//! One flat record, built once from the parsed CLI and passed unchanged into
//! every handler call. Fields a given command does not use simply keep their
//! defaults; handlers only read what their contract names.

/// Options for one program invocation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Print external commands without executing them or touching the filesystem.
    pub dry_run: bool,
    /// Print skip reasons and each external command line.
    pub verbose: bool,
    /// Never fall back to lossy rotation; skip the file instead.
    pub lossless_only: bool,
    /// Descend into directory arguments recursively.
    pub recursive: bool,
    /// Answer every overwrite question with yes.
    pub no_prompt: bool,
    /// JPEG quality for web preparation.
    pub quality: u32,
    /// ImageMagick geometry string for resize.
    pub size: String,
    /// Clockwise rotation for the rotate command.
    pub degrees: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dry_run: false,
            verbose: false,
            lossless_only: false,
            recursive: false,
            no_prompt: false,
            quality: 50,
            size: String::new(),
            degrees: 0,
        }
    }
}
