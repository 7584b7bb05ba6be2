use std::path::PathBuf;

/// What was read for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    /// The full file content, decoded as UTF-8 and otherwise untouched.
    Text(String),
    /// The file could not be read or decoded; holds the error message.
    Unreadable(String),
}

/// A single file in the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpEntry {
    /// The root joined with the file's relative path, as walked.
    pub path: PathBuf,
    pub content: EntryContent,
}
impl DumpEntry {
    pub fn is_unreadable(&self) -> bool {
        matches!(self.content, EntryContent::Unreadable(_))
    }
}

/// Counts of what a run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Every entry written, unreadable ones included.
    pub files: usize,
    /// Entries written with an error marker instead of content.
    pub unreadable: usize,
}
impl DumpSummary {
    pub(crate) fn record(&mut self, entry: &DumpEntry) {
        self.files += 1;
        if entry.is_unreadable() {
            self.unreadable += 1;
        }
    }
}
