use crate::error::DumpError;
use crate::options::{DumpOptions, Exclusions};
use crate::output::write_entry;
use crate::types::{DumpEntry, DumpSummary, EntryContent};
use ignore::WalkBuilder;
use std::cmp::Ordering;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
fn build_walk(options: &DumpOptions) -> ignore::Walk {
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links);
    let exclusions = options.exclusions.clone();
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !(is_dir
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| exclusions.excludes_dir(name)))
    });
    let follow_links = options.follow_links;
    builder.sort_by_file_path(move |a, b| files_first(a, b, follow_links));
    builder.build()
}
/// Non-directories before directories, then by name, so that every file of a
/// directory is emitted before the walk descends.
///
/// Each comparison stats both paths. An entry whose metadata cannot be read
/// sorts with the files; it surfaces as an unreadable entry or walk error.
fn files_first(a: &Path, b: &Path, follow_links: bool) -> Ordering {
    is_walkable_dir(a, follow_links)
        .cmp(&is_walkable_dir(b, follow_links))
        .then_with(|| a.file_name().cmp(&b.file_name()))
}
fn is_walkable_dir(path: &Path, follow_links: bool) -> bool {
    let metadata = if follow_links {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };
    metadata.map(|m| m.is_dir()).unwrap_or(false)
}
/// Regular files, and symlinks that do not resolve to a directory. Dangling
/// links count so that they surface as unreadable entries.
fn is_dumpable(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => match fs::metadata(entry.path()) {
            Ok(target) => target.is_file(),
            Err(_) => true,
        },
        _ => false,
    }
}
fn ensure_root(root: &Path) -> Result<(), DumpError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(DumpError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        ))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(DumpError::PathNotFound(root.to_path_buf()))
        }
        Err(e) => Err(DumpError::io(root, e)),
    }
}
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
fn error_depth(err: &ignore::Error) -> Option<usize> {
    match err {
        ignore::Error::WithDepth { depth, .. } => Some(*depth),
        ignore::Error::WithPath { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_depth(err)
        }
        _ => None,
    }
}
fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithPath { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        _ => false,
    }
}
fn is_dangling_link(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
        && fs::metadata(path).is_err()
}
/// Decides what a walk error means for the dump.
///
/// A dangling symlink met while following links is handed back as a path so
/// it gets an unreadable entry. An unreadable directory below the root is
/// skipped. Link loops and failures at the root stop the run.
fn recover_walk_error(err: ignore::Error) -> Result<Option<PathBuf>, DumpError> {
    if is_loop(&err) {
        return Err(DumpError::Walk(err.to_string()));
    }
    if let Some(path) = error_path(&err).filter(|p| is_dangling_link(p)) {
        return Ok(Some(path.to_path_buf()));
    }
    match error_depth(&err) {
        Some(depth) if depth > 0 => {
            #[cfg(feature = "logging")]
            tracing::warn!("Skipping unreadable directory: {}", err);
            Ok(None)
        }
        _ => Err(DumpError::Walk(err.to_string())),
    }
}
fn read_text(path: &Path) -> Result<String, DumpError> {
    let file = File::open(path).map_err(|e| DumpError::io(path, e))?;
    let capacity = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(capacity);
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| DumpError::io(path, e))?;
    String::from_utf8(bytes).map_err(|source| DumpError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
fn read_entry_content(path: &Path) -> EntryContent {
    match read_text(path) {
        Ok(content) => EntryContent::Text(content),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Unreadable file {}: {}", path.display(), e);
            EntryContent::Unreadable(e.to_string())
        }
    }
}
/// Iterator over the entries of a dump, in output order.
///
/// Yields an error and should be abandoned when the walk cannot continue:
/// the root cannot be listed or followed links form a loop. Per-file read
/// failures are not errors here: they come back as
/// [`EntryContent::Unreadable`]. Subdirectories that cannot be listed are
/// skipped.
pub struct DumpStream {
    walker: ignore::Walk,
    exclusions: Exclusions,
    output: Option<PathBuf>,
}
impl DumpStream {
    pub fn new(options: &DumpOptions) -> Result<Self, DumpError> {
        ensure_root(&options.root)?;
        Ok(Self {
            walker: build_walk(options),
            exclusions: options.exclusions.clone(),
            output: fs::canonicalize(&options.output).ok(),
        })
    }
    fn is_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.exclusions.excludes_file(name))
    }
    // The dump may live inside the tree it is dumping.
    fn is_output(&self, path: &Path) -> bool {
        let Some(output) = &self.output else {
            return false;
        };
        if path.file_name() != output.file_name() {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|p| &p == output)
    }
}
impl Iterator for DumpStream {
    type Item = Result<DumpEntry, DumpError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.walker.next()? {
                Ok(entry) if is_dumpable(&entry) => entry.into_path(),
                Ok(_) => continue,
                Err(e) => match recover_walk_error(e) {
                    Ok(Some(path)) => path,
                    Ok(None) => continue,
                    Err(fatal) => return Some(Err(fatal)),
                },
            };
            if self.is_excluded(&path) || self.is_output(&path) {
                continue;
            }
            let content = read_entry_content(&path);
            return Some(Ok(DumpEntry { path, content }));
        }
    }
}
/// Writes the dump for `options.root` to an arbitrary writer.
///
/// `options.output` is still consulted so that an existing output file inside
/// the tree is not dumped into itself.
pub fn dump_to_writer<W: Write>(
    options: &DumpOptions,
    out: &mut W,
) -> Result<DumpSummary, DumpError> {
    let mut summary = DumpSummary::default();
    for entry in DumpStream::new(options)? {
        let entry = entry?;
        #[cfg(feature = "logging")]
        tracing::debug!("Dumping {}", entry.path.display());
        write_entry(out, &entry).map_err(|e| DumpError::io(&options.output, e))?;
        summary.record(&entry);
    }
    Ok(summary)
}
/// Creates or truncates `options.output` and fills it with the dump of
/// `options.root`.
///
/// # Errors
///
/// Fails without touching the output when the root is missing or is not a
/// directory. Once the output is open, a fatal walk error or a write failure
/// leaves the partially written file in place.
pub fn generate(options: &DumpOptions) -> Result<DumpSummary, DumpError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Dumping {} into {}",
        options.root.display(),
        options.output.display()
    );
    ensure_root(&options.root)?;
    let file = File::create(&options.output).map_err(|e| DumpError::output(&options.output, e))?;
    let mut writer = BufWriter::new(file);
    let summary = dump_to_writer(options, &mut writer)?;
    writer
        .flush()
        .map_err(|e| DumpError::io(&options.output, e))?;
    #[cfg(feature = "logging")]
    tracing::info!(
        "Wrote {} entries ({} unreadable) to {}",
        summary.files,
        summary.unreadable,
        options.output.display()
    );
    Ok(summary)
}
