//! # Flatdump
//!
//! `flatdump` walks a directory tree and concatenates every file into one text
//! dump. Each entry is the file's path on a single-quoted line followed by its
//! content, also single-quoted, so a whole project can be reviewed or shared as
//! a single file.
//!
//! Files and directories are left out by exact base name through
//! [`Exclusions`]. Excluded directories are pruned: nothing beneath them is
//! visited. A file that cannot be read or is not valid UTF-8 does not stop the
//! run; its entry carries an error marker instead of content.
//!
//! # Features
//!
//! - `logging` (default): Enables diagnostics via the `tracing` crate and the
//!   `tracing-subscriber` setup used by the binary.
//!
//! # Example
//!
//! ```no_run
//! use flatdump::{DumpBuilder, generate};
//!
//! let options = DumpBuilder::new("./my-project", "dump.txt")
//!     .exclude_dir("target")
//!     .exclude_file("Cargo.lock")
//!     .build();
//!
//! let summary = generate(&options).expect("Failed to dump directory");
//! println!("{} files, {} unreadable", summary.files, summary.unreadable);
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{DumpStream, dump_to_writer, generate};
pub use error::DumpError;
pub use options::{
    DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES, DumpBuilder, DumpOptions, Exclusions,
};
pub use types::{DumpEntry, DumpSummary, EntryContent};
