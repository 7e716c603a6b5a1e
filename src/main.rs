use clap::{Parser, Subcommand};
use photoprep::exec::{Executor, SystemRunner};
use photoprep::options::Options;
use photoprep::prompt::StdinPrompter;
use photoprep::{collect, exif, rename, resize, rotate, web};
use std::path::PathBuf;
use std::process::ExitCode;

/// Shared flags every command accepts.
#[derive(clap::Args, Clone)]
struct CommonArgs {
    /// Print the external commands without executing them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Descend into directory arguments recursively
    #[arg(short, long)]
    recursive: bool,
}

impl CommonArgs {
    fn into_options(self) -> Options {
        Options {
            dry_run: self.dry_run,
            verbose: self.verbose,
            recursive: self.recursive,
            ..Options::default()
        }
    }
}

#[derive(Parser)]
#[command(name = "photoprep")]
#[command(about = "Prepare pictures and photos")]
#[command(long_about = "\
Prepare pictures and photos

Batch-processes image files by dispatching to external tools: jpegtran for
lossless JPEG rotation, ImageMagick (convert/mogrify) for everything lossy,
jhead for EXIF editing, and jpegexiforient for orientation reading.

Rotation is performed lossless whenever possible. Not every JPEG can be
rotated lossless; it depends on the image dimensions being divisible by the
codec block size (compare: jpegtran -perfect). When a lossless rotation is
not possible, ImageMagick performs the rotation instead, so the content of
the photo always stays the same and no mirroring effect occurs.

Depends on: imagemagick, jpegtran, jpegexiforient, jhead")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rotate images clockwise by a fixed number of degrees
    Rotate {
        #[command(flatten)]
        common: CommonArgs,

        /// Only perform lossless rotation, skipping files it cannot handle
        #[arg(short, long)]
        lossless_only: bool,

        /// Degrees to rotate clockwise
        #[arg(value_parser = parse_degrees)]
        degrees: i32,

        /// File or folder
        #[arg(required = true)]
        file: Vec<PathBuf>,
    },
    /// Rotate images by their EXIF orientation
    AutoRotate {
        #[command(flatten)]
        common: CommonArgs,

        /// Only perform lossless rotation, skipping files it cannot handle
        #[arg(short, long)]
        lossless_only: bool,

        /// File or folder
        #[arg(required = true)]
        file: Vec<PathBuf>,
    },
    /// Prepare images for the web by stripping metadata and reducing quality
    Web {
        #[command(flatten)]
        common: CommonArgs,

        /// Answer all questions with yes
        #[arg(short, long)]
        yes: bool,

        /// Compression level
        #[arg(long, default_value_t = 50)]
        quality: u32,

        /// File or folder
        #[arg(required = true)]
        file: Vec<PathBuf>,
    },
    /// Resize images
    Resize {
        #[command(flatten)]
        common: CommonArgs,

        /// Answer all questions with yes
        #[arg(short, long)]
        yes: bool,

        /// The new size in ImageMagick geometry syntax, e.g. 300, x200,
        /// 300x200, or 300x200! to ignore the original aspect ratio
        size: String,

        /// File or folder
        #[arg(required = true)]
        file: Vec<PathBuf>,
    },
    /// Remove all EXIF tags, in place
    RemoveExif {
        #[command(flatten)]
        common: CommonArgs,

        /// File or folder
        #[arg(required = true)]
        file: Vec<PathBuf>,
    },
    /// Rename images by EXIF capture date (file date when the tag is missing)
    Rename {
        #[command(flatten)]
        common: CommonArgs,

        /// Answer all questions with yes
        #[arg(short, long)]
        yes: bool,

        /// File or folder
        #[arg(required = true)]
        file: Vec<PathBuf>,
    },
}

fn parse_degrees(s: &str) -> Result<i32, String> {
    match s {
        "90" => Ok(90),
        "180" => Ok(180),
        "270" => Ok(270),
        _ => Err(format!("'{s}' is not one of 90, 180, 270")),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let runner = SystemRunner;
    let mut prompter = StdinPrompter;

    match cli.command {
        Command::Rotate {
            common,
            lossless_only,
            degrees,
            file,
        } => {
            let opts = Options {
                lossless_only,
                degrees,
                ..common.into_options()
            };
            let files = collect::collect_files(&file, opts.recursive)?;
            let exec = Executor::new(&runner, &opts);
            rotate::rotate(&exec, &files, &opts)?;
        }
        Command::AutoRotate {
            common,
            lossless_only,
            file,
        } => {
            let opts = Options {
                lossless_only,
                ..common.into_options()
            };
            let files = collect::collect_files(&file, opts.recursive)?;
            let exec = Executor::new(&runner, &opts);
            rotate::auto_rotate(&exec, &files, &opts)?;
        }
        Command::Web {
            common,
            yes,
            quality,
            file,
        } => {
            let opts = Options {
                no_prompt: yes,
                quality,
                ..common.into_options()
            };
            let files = collect::collect_files(&file, opts.recursive)?;
            let exec = Executor::new(&runner, &opts);
            web::web(&exec, &files, &opts, &mut prompter)?;
        }
        Command::Resize {
            common,
            yes,
            size,
            file,
        } => {
            let opts = Options {
                no_prompt: yes,
                size,
                ..common.into_options()
            };
            let files = collect::collect_files(&file, opts.recursive)?;
            let exec = Executor::new(&runner, &opts);
            resize::resize(&exec, &files, &opts, &mut prompter)?;
        }
        Command::RemoveExif { common, file } => {
            let opts = common.into_options();
            let files = collect::collect_files(&file, opts.recursive)?;
            let exec = Executor::new(&runner, &opts);
            exif::remove_exif(&exec, &files)?;
        }
        Command::Rename { common, yes, file } => {
            let opts = Options {
                no_prompt: yes,
                ..common.into_options()
            };
            let files = collect::collect_files(&file, opts.recursive)?;
            let exec = Executor::new(&runner, &opts);
            rename::rename(&exec, &files, &opts, &mut prompter)?;
        }
    }

    Ok(())
}
