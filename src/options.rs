use crate::error::DumpError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File names skipped anywhere in the tree unless overridden.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "package-lock.json",
    "scraped_files.json",
    "a.py",
    "README.md",
    "google_key.json",
    "file.txt",
];

/// Directory names pruned anywhere in the tree unless overridden.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "docs"];

/// Base names to leave out of a dump. Matching is exact and case-sensitive.
///
/// Deserializing treats an absent key as an empty set; only
/// [`Exclusions::default`] carries the built-in names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Exclusions {
    #[serde(default)]
    pub files: BTreeSet<String>,
    #[serde(default)]
    pub dirs: BTreeSet<String>,
}
impl Default for Exclusions {
    fn default() -> Self {
        Self {
            files: DEFAULT_EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
            dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
impl Exclusions {
    /// No exclusions at all.
    pub fn none() -> Self {
        Self {
            files: BTreeSet::new(),
            dirs: BTreeSet::new(),
        }
    }
    /// Loads exclusions from a JSON document such as
    /// `{"files": ["README.md"], "dirs": ["target"]}`.
    ///
    /// A missing key yields an empty set for that key, not the defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DumpError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| DumpError::io(path, e))?;
        serde_json::from_str(&raw)
            .map_err(|e| DumpError::Config(format!("{}: {}", path.display(), e)))
    }
    pub fn excludes_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }
}

#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub exclusions: Exclusions,
    pub follow_links: bool,
}
impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("dump.txt"),
            exclusions: Exclusions::default(),
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct DumpBuilder {
    options: DumpOptions,
}
impl DumpBuilder {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            options: DumpOptions {
                root: root.into(),
                output: output.into(),
                ..Default::default()
            },
        }
    }
    pub fn exclusions(mut self, exclusions: Exclusions) -> Self {
        self.options.exclusions = exclusions;
        self
    }
    pub fn exclude_file(mut self, name: impl Into<String>) -> Self {
        self.options.exclusions.files.insert(name.into());
        self
    }
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.options.exclusions.dirs.insert(name.into());
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> DumpOptions {
        self.options
    }
}
