//! In-memory line store for a single text file
//!
//! SWMM text outputs are small enough to hold whole, so every reader loads
//! its file exactly once into a [Document] and never touches the disk again.
//! Lines keep their trailing spaces because the report format terminates
//! blocks on a blank-ish line ending in two spaces, which would otherwise be
//! destroyed by trimming.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// internal modules
use crate::error::{ReadError, Result};

/// An ordered, immutable sequence of lines read from one source file
///
/// Loaded once per reader instance. If the underlying file changes on disk
/// afterwards, the reader's view is stale - there is no invalidation path.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Read every line of the file at `path`
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped; trailing spaces are
    /// preserved.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| ReadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            lines.push(strip_carriage_return(line));
        }

        Ok(Self { lines })
    }

    /// Build a document from lines already in memory
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines = lines.into_iter().map(strip_carriage_return).collect();
        Self { lines }
    }

    /// Build a document by splitting a text blob on newlines
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n').map(String::from).collect())
    }

    /// Number of lines held
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True for a zero-line document
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Single line by 0-based index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The `[start, end)` span of lines, clamped to the document length
    pub fn span(&self, start: usize, end: Option<usize>) -> &[String] {
        let end = end.unwrap_or(self.lines.len()).min(self.lines.len());
        let start = start.min(end);
        &self.lines[start..end]
    }
}

/// BufRead::lines strips `\n` but leaves `\r` from CRLF files behind
fn strip_carriage_return(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn trailing_spaces_survive_loading() {
        let doc = Document::from_text("data\n  \nmore");
        assert_eq!(doc.line(1), Some("  "));
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let doc = Document::from_lines(vec!["one\r".to_string(), "two".to_string()]);
        assert_eq!(doc.line(0), Some("one"));
        assert_eq!(doc.line(1), Some("two"));
    }

    #[test]
    fn span_clamps_to_document_length() {
        let doc = Document::from_text("a\nb\nc");
        assert_eq!(doc.span(1, None).len(), 2);
        assert_eq!(doc.span(1, Some(10)).len(), 2);
        assert_eq!(doc.span(5, None).len(), 0);
    }

    #[test]
    fn file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[JUNCTIONS]\nJ1 1.0\n").unwrap();

        let doc = Document::from_path(file.path()).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.line(0), Some("[JUNCTIONS]"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Document::from_path("/definitely/not/a/real/file.rpt");
        assert!(matches!(result, Err(ReadError::Io { .. })));
    }
}
