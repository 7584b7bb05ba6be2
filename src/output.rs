//! The dump text format.
//!
//! Every entry is a single-quoted path line followed by a single-quoted
//! content line. Content is written verbatim, so embedded newlines and quotes
//! appear literally. Readable entries are separated by three blank lines,
//! unreadable ones by a single blank line:
//!
//! ```text
//! 'src/main.rs'
//! 'fn main() {}'
//!
//!
//!
//! 'logo.png'
//! '[Error reading file: ...]'
//!
//! ```

use crate::types::{DumpEntry, EntryContent};
use std::io::{self, Write};

const CONTENT_SEPARATOR: &str = "\n\n\n\n";
const ERROR_SEPARATOR: &str = "\n\n";

/// Writes one entry in dump format.
pub fn write_entry<W: Write>(out: &mut W, entry: &DumpEntry) -> io::Result<()> {
    writeln!(out, "'{}'", entry.path.display())?;
    match &entry.content {
        EntryContent::Text(content) => write!(out, "'{}'{}", content, CONTENT_SEPARATOR),
        EntryContent::Unreadable(message) => write!(
            out,
            "'[Error reading file: {}]'{}",
            message, ERROR_SEPARATOR
        ),
    }
}

/// Formats one entry into a string.
pub fn format_entry(entry: &DumpEntry) -> String {
    let mut buf = Vec::with_capacity(entry_len_hint(entry));
    // Writing into a Vec cannot fail.
    let _ = write_entry(&mut buf, entry);
    String::from_utf8_lossy(&buf).into_owned()
}

fn entry_len_hint(entry: &DumpEntry) -> usize {
    let body = match &entry.content {
        EntryContent::Text(content) => content.len(),
        EntryContent::Unreadable(message) => message.len() + 24,
    };
    entry.path.as_os_str().len() + body + 8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn readable_entry_has_three_blank_lines() {
        let entry = DumpEntry {
            path: PathBuf::from("root/a.txt"),
            content: EntryContent::Text("hello".into()),
        };
        assert_eq!(format_entry(&entry), "'root/a.txt'\n'hello'\n\n\n\n");
    }

    #[test]
    fn unreadable_entry_has_one_blank_line() {
        let entry = DumpEntry {
            path: PathBuf::from("root/bad.bin"),
            content: EntryContent::Unreadable("boom".into()),
        };
        assert_eq!(
            format_entry(&entry),
            "'root/bad.bin'\n'[Error reading file: boom]'\n\n"
        );
    }

    #[test]
    fn content_is_not_escaped() {
        let entry = DumpEntry {
            path: PathBuf::from("q.txt"),
            content: EntryContent::Text("it's\nmulti\n".into()),
        };
        assert_eq!(format_entry(&entry), "'q.txt'\n'it's\nmulti\n'\n\n\n\n");
    }
}
