//! Block location within a document
//!
//! A block is a contiguous, named section of data rows bounded by a header
//! marker line and a terminating sentinel. The report format ends every
//! block with a blank-ish line (two trailing spaces); the input format ends
//! a section where the next bracketed tag begins. Both conventions reduce to
//! the same pair of operations here:
//!
//! - [locate] - find where a block's data rows begin
//! - [locate_end] - find where they stop
//!
//! The sentinel is a configurable literal, never hardcoded, because its
//! exact form has changed between SWMM builds and a silent mismatch would
//! truncate every block to zero rows.

// internal modules
use crate::document::Document;
use crate::error::{ReadError, Result};
use crate::utils::contains_ignore_case;

/// How marker strings are compared against document lines
///
/// Report headers are free text and match case-insensitively. Input file
/// markers are bracketed tokens such as `[JUNCTIONS]` and match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCase {
    Sensitive,
    Insensitive,
}

/// Index of the first line at or after `from` containing `marker`
///
/// Fails with [ReadError::BlockNotFound] when the marker never occurs. A
/// scan that falls through without a match must signal, not hand back the
/// last line.
pub fn find_marker(
    document: &Document,
    marker: &str,
    from: usize,
    case: MatchCase,
) -> Result<usize> {
    document
        .lines()
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| line_contains(line, marker, case))
        .map(|(index, _)| index)
        .ok_or_else(|| ReadError::BlockNotFound {
            marker: marker.to_string(),
        })
}

/// Index of the first data row of a block
///
/// The marker line is located first, then `descriptor_lines` of headers,
/// underlines, and units text are skipped. The returned index is
/// `marker_index + descriptor_lines` and always points strictly after the
/// marker and its descriptor rows.
pub fn locate(
    document: &Document,
    marker: &str,
    descriptor_lines: usize,
    case: MatchCase,
) -> Result<usize> {
    let marker_index = find_marker(document, marker, 0, case)?;
    Ok(marker_index + descriptor_lines)
}

/// Exclusive end index of the block starting at `start`
///
/// Every line of the document is checked against the sentinel and the
/// smallest matching index strictly greater than `start` wins. `None` means
/// no sentinel follows the block, which happens for the last block in the
/// file - the block then runs to end-of-file.
///
/// The scan is deliberately global rather than forward-only. Sentinel lines
/// placed before `start` (earlier blank lines, dashed separators from a
/// previous block) are recorded and discarded, matching how files with
/// inconsistently placed sentinels have always been handled.
pub fn locate_end(document: &Document, start: usize, sentinel: &str) -> Option<usize> {
    document
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| line_has_sentinel(line, sentinel))
        .map(|(index, _)| index)
        .find(|&index| index > start)
}

/// The `[start, end)` line span of a block, end resolved to EOF if needed
pub fn block_span(
    document: &Document,
    marker: &str,
    descriptor_lines: usize,
    sentinel: &str,
    case: MatchCase,
) -> Result<(usize, usize)> {
    let start = locate(document, marker, descriptor_lines, case)?;
    let end = locate_end(document, start, sentinel).unwrap_or(document.len());
    Ok((start, end))
}

/// Remove every line whose first character is the comment marker
///
/// Order-preserving and strictly a subset of the input; nothing else is
/// altered.
///
/// ```rust
/// # use swmmtab::blocks::strip_comments;
/// let lines = vec![";note".to_string(), "J1 1.0".to_string()];
/// let kept = strip_comments(&lines, ';');
/// assert_eq!(kept, vec!["J1 1.0"]);
/// ```
pub fn strip_comments(lines: &[String], comment_marker: char) -> Vec<&str> {
    lines
        .iter()
        .map(String::as_str)
        .filter(|line| !line.starts_with(comment_marker))
        .collect()
}

/// Sentinel check against the line as it appeared on disk
///
/// The sentinel literal may reference the line terminator (the report format
/// uses two-spaces-then-newline), so the newline is restored before the
/// substring test.
pub fn line_has_sentinel(line: &str, sentinel: &str) -> bool {
    match sentinel.strip_suffix('\n') {
        Some(tail) => line.ends_with(tail),
        None => line.contains(sentinel),
    }
}

fn line_contains(line: &str, marker: &str, case: MatchCase) -> bool {
    match case {
        MatchCase::Sensitive => line.contains(marker),
        MatchCase::Insensitive => contains_ignore_case(line, marker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn document() -> Document {
        // line 3 ends in two spaces, line 5 is the blank-ish sentinel
        Document::from_text(
            "header\nNode Depth Summary\nunderline\nJ1 data  \nJ2 data\n  \nNode Inflow Summary\nJ1 more",
        )
    }

    #[test]
    fn locate_skips_marker_and_descriptor_lines() {
        let doc = document();
        let start = locate(&doc, "Node Depth Summary", 2, MatchCase::Insensitive).unwrap();
        assert_eq!(start, 3);
        assert!(doc.line(1).unwrap().contains("Node Depth Summary"));
    }

    #[test]
    fn locate_is_case_insensitive_when_asked() {
        let doc = document();
        assert!(locate(&doc, "node depth summary", 2, MatchCase::Insensitive).is_ok());
        assert!(matches!(
            locate(&doc, "node depth summary", 2, MatchCase::Sensitive),
            Err(ReadError::BlockNotFound { .. })
        ));
    }

    #[test]
    fn missing_marker_is_block_not_found() {
        let doc = document();
        let result = locate(&doc, "Storage Volume Summary", 2, MatchCase::Insensitive);
        assert!(matches!(result, Err(ReadError::BlockNotFound { marker }) if marker.contains("Storage")));
    }

    #[test]
    fn marker_on_line_zero_is_found() {
        let doc = Document::from_text("header\nrest");
        assert_eq!(find_marker(&doc, "header", 0, MatchCase::Sensitive).unwrap(), 0);
    }

    #[test]
    fn end_is_first_sentinel_after_start() {
        let doc = document();
        // line 3 ends in two spaces but precedes nothing; line 5 is the blank-ish one
        assert_eq!(locate_end(&doc, 3, "  \n"), Some(5));
    }

    #[test]
    fn sentinel_before_start_is_ignored() {
        let doc = document();
        // the data line ending in two spaces sits at index 3, before this start
        assert_eq!(locate_end(&doc, 5, "  \n"), None);
    }

    #[test]
    fn last_block_runs_to_end_of_file() {
        let doc = document();
        let (start, end) = block_span(
            &doc,
            "Node Inflow Summary",
            1,
            "  \n",
            MatchCase::Insensitive,
        )
        .unwrap();
        assert_eq!((start, end), (7, doc.len()));
    }

    #[test]
    fn bracket_sentinel_matches_section_tags() {
        let doc = Document::from_text("[JUNCTIONS]\nJ1 1\nJ2 2\n\n[OUTFALLS]\nO1 0");
        assert_eq!(locate_end(&doc, 1, "["), Some(4));
    }

    #[rstest]
    #[case(";comment", false)]
    #[case("J1 1.0", true)]
    #[case("", true)]
    fn comment_filter_keeps_only_uncommented(#[case] line: &str, #[case] kept: bool) {
        let lines = vec![line.to_string()];
        assert_eq!(!strip_comments(&lines, ';').is_empty(), kept);
    }

    #[test]
    fn comment_filter_preserves_order() {
        let lines: Vec<String> = [";a", "one", ";b", "two", "three"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(strip_comments(&lines, ';'), vec!["one", "two", "three"]);
    }
}
