//! Reader for LSPC summary (`.out`) files
//!
//! The LSPC watershed model writes its results catalog as a `TT`-prefixed
//! comment banner: one line per output variable carrying the short name, a
//! prose description, and the unit in trailing parentheses. The listing
//! starts after the `TT Label` banner line and runs to a fixed number of
//! closing comment lines at end-of-file.

// standard library
use std::path::Path;

// internal modules
use crate::blocks::{find_marker, MatchCase};
use crate::document::Document;
use crate::error::{ReadError, Result};
use crate::table::{Table, Value};

// external crates
use log::trace;

/// Banner line immediately above the variable listing
const LABEL_MARKER: &str = "TT Label";

/// Closing comment lines at end-of-file, as a negative offset
const DEFAULT_EOF_COMMENTS: i64 = -2;

/// A reader for the LSPC summary variable listing
///
/// Example:
/// ```ignore
///     let mut out = LspcSummaryReader::from_path("results.out")?;
///     let variables = out.variables()?;
/// ```
#[derive(Debug)]
pub struct LspcSummaryReader {
    /// The summary file, loaded once
    document: Document,
    /// Negative offset trimming the closing comment lines
    eof_comments: i64,
    /// The variable table, computed on first access
    variables: Option<Table>,
}

impl LspcSummaryReader {
    /// Read the summary file at `path` with the default two-line trailer
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_eof_comments(Document::from_path(path)?, DEFAULT_EOF_COMMENTS)
    }

    /// Build a reader with an explicit end-of-file comment-line count
    ///
    /// The count is a negative offset from end-of-file; a positive value is
    /// rejected up front rather than silently swallowing data rows.
    pub fn with_eof_comments(document: Document, eof_comments: i64) -> Result<Self> {
        if eof_comments > 0 {
            return Err(ReadError::InvalidConfiguration {
                reason: format!(
                    "end-of-file comment count must be a negative offset, got {eof_comments}"
                ),
            });
        }
        Ok(Self {
            document,
            eof_comments,
            variables: None,
        })
    }

    /// Build a reader over lines already in memory, default trailer
    pub fn from_lines(lines: Vec<String>) -> Result<Self> {
        Self::with_eof_comments(Document::from_lines(lines), DEFAULT_EOF_COMMENTS)
    }

    /// The variable listing: one row per output variable, keyed by its
    /// short name, with `unit` and `description` columns
    pub fn variables(&mut self) -> Result<&Table> {
        if self.variables.is_none() {
            let table = self.build_variables()?;
            self.variables = Some(table);
        }
        Ok(self.variables.as_ref().unwrap())
    }

    fn build_variables(&self) -> Result<Table> {
        let start = find_marker(&self.document, LABEL_MARKER, 0, MatchCase::Sensitive)? + 1;
        let end = (self.document.len() as i64 + self.eof_comments).max(start as i64) as usize;
        trace!("Variable listing spans lines {start}..{end}");

        let mut index = Vec::new();
        let mut rows = Vec::new();
        for line in self.document.span(start, Some(end)) {
            // each row reads `TT <name> <description...> (<unit>)`
            let body = line.strip_prefix("TT").unwrap_or(line).trim_start();
            let mut tokens = body.split_whitespace();
            let name = match tokens.next() {
                Some(name) => name,
                None => continue,
            };
            let description = tokens.collect::<Vec<&str>>().join(" ");
            let unit = line
                .rsplit_once(" (")
                .map(|(_, tail)| tail.trim().trim_end_matches(')'))
                .unwrap_or_default();

            index.push(name.to_string());
            rows.push(vec![
                Value::Text(unit.to_string()),
                Value::Text(description),
            ]);
        }

        Table::from_parts(
            None,
            vec!["unit".to_string(), "description".to_string()],
            index,
            rows,
        )
    }
}
