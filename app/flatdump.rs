//! Command-line interface for flatdump.
//!
//! Walks a directory tree and writes every non-excluded file, path first, into
//! a single dump file.

use clap::Parser;
use flatdump::{DumpBuilder, DumpOptions, Exclusions, generate};
use std::path::PathBuf;
use std::process::exit;

/// flatdump — flatten a directory tree into one text file
#[derive(Parser)]
#[command(name = "flatdump", version, about, long_about = None)]
struct Cli {
    /// Directory to dump
    root: PathBuf,

    /// File to write the dump to (created or truncated)
    output: PathBuf,

    /// JSON file with {"files": [...], "dirs": [...]} replacing the built-in exclusions
    #[arg(long, value_name = "FILE")]
    exclusions: Option<PathBuf>,

    /// Additional file name to skip (can be repeated)
    #[arg(short = 'f', long = "exclude-file", value_name = "NAME")]
    exclude_files: Vec<String>,

    /// Additional directory name to prune (can be repeated)
    #[arg(short = 'd', long = "exclude-dir", value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Log each dumped file to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> Result<(DumpOptions, bool), flatdump::DumpError> {
        let exclusions = match &self.exclusions {
            Some(path) => Exclusions::from_json_file(path)?,
            None => Exclusions::default(),
        };
        let mut builder = DumpBuilder::new(self.root, self.output)
            .exclusions(exclusions)
            .follow_links(self.follow_links);
        for name in self.exclude_files {
            builder = builder.exclude_file(name);
        }
        for name in self.exclude_dirs {
            builder = builder.exclude_dir(name);
        }
        Ok((builder.build(), self.verbose))
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "flatdump=debug" } else { "flatdump=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    let (options, _verbose) = match cli.into_options() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    #[cfg(feature = "logging")]
    init_logging(_verbose);

    if let Err(e) = generate(&options) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
