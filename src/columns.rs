//! Column inference from visual header layout
//!
//! Most blocks have fixed, known column sets, but the free-text summary
//! tables (outfall loading, pollutant loads, interface data) grow and shrink
//! their columns with the model, so their names have to be read off the
//! header text itself.
//!
//! The label rows are treated as a mask of filled vs empty character
//! columns. A character column is active when any label row has a non-space
//! character there, and each maximal run of active columns becomes one
//! output column. Labels stacked over the same run on different rows are
//! joined top-to-bottom with a space before sanitising, which is how a
//! two-line header like `Total` over `Volume` becomes `Total_Volume`.

// standard library
use std::ops::Range;

// internal modules
use crate::blocks::{find_marker, MatchCase};
use crate::document::Document;
use crate::error::{ReadError, Result};

// external crates
use itertools::Itertools;
use log::trace;

/// Characters replaced with `_` when sanitising an inferred label
const SANITISE: &str = "!@#$%^&*()-+={}[]:;<>/? ";

/// Derive column names from the label rows following `label_anchor`
///
/// The label text begins `blank_gap + 1` lines after the anchor line and
/// spans `label_line_count` physical lines. A negative `blank_gap` walks
/// backwards; `-1` makes the anchor line itself the first label row, which
/// is how the interface file's single-line header is read.
///
/// Returns one sanitised name per detected span, in left-to-right order. An
/// all-blank label region yields zero names - the caller treats that as a
/// descriptor configuration error, not something to retry.
pub fn infer_columns(
    document: &Document,
    label_anchor: &str,
    blank_gap: i64,
    label_line_count: usize,
    case: MatchCase,
) -> Result<Vec<String>> {
    let anchor = find_marker(document, label_anchor, 0, case)?;

    let start = anchor as i64 + blank_gap + 1;
    if start < 0 || start as usize + label_line_count > document.len() {
        return Err(ReadError::InvalidConfiguration {
            reason: format!(
                "label rows for {label_anchor:?} fall outside the document \
                 (anchor {anchor}, gap {blank_gap}, lines {label_line_count})"
            ),
        });
    }
    let start = start as usize;

    let rows: Vec<&str> = document.span(start, Some(start + label_line_count))
        .iter()
        .map(String::as_str)
        .collect();

    let spans = occupied_spans(&rows);
    trace!("{} column spans under {label_anchor:?}", spans.len());

    Ok(spans
        .into_iter()
        .map(|span| sanitise(&join_labels(&rows, &span)))
        .collect())
}

/// Maximal runs of character columns occupied in any label row
fn occupied_spans(rows: &[&str]) -> Vec<Range<usize>> {
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

    // logical OR of the per-row occupancy masks
    let mut active = vec![false; width];
    for row in rows {
        for (position, character) in row.chars().enumerate() {
            if character != ' ' {
                active[position] = true;
            }
        }
    }

    // edge transitions bound each span; a synthetic inactive column on both
    // sides closes runs touching the edges
    let mut spans = Vec::new();
    let mut run_start = None;
    for (position, is_active) in active.iter().chain([&false]).enumerate() {
        match (run_start, *is_active) {
            (None, true) => run_start = Some(position),
            (Some(start), false) => {
                spans.push(start..position);
                run_start = None;
            }
            _ => (),
        }
    }
    spans
}

/// Fragments of each label row within `span`, trimmed and joined with a space
fn join_labels(rows: &[&str], span: &Range<usize>) -> String {
    rows.iter()
        .map(|row| {
            row.chars()
                .skip(span.start)
                .take(span.end - span.start)
                .collect::<String>()
                .trim()
                .to_string()
        })
        .filter(|fragment| !fragment.is_empty())
        .join(" ")
}

/// Reduce a composite label to an identifier-safe name
///
/// Punctuation and spaces become underscores, then repeated underscores
/// collapse until stable.
///
/// ```rust
/// # use swmmtab::columns::sanitise;
/// assert_eq!(sanitise("Time of Max (days)"), "Time_of_Max_days_");
/// assert_eq!(sanitise("10^6 gal"), "10_6_gal");
/// ```
pub fn sanitise(label: &str) -> String {
    let mut name: String = label
        .chars()
        .map(|c| if SANITISE.contains(c) { '_' } else { c })
        .collect();
    while name.contains("__") {
        name = name.replace("__", "_");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn two_row_labels_produce_two_spans() {
        let doc = Document::from_text("anchor\n\nAAAA   BBB\n    CC   ");
        let names = infer_columns(&doc, "anchor", 1, 2, MatchCase::Sensitive).unwrap();
        assert_eq!(names, vec!["AAAA_CC", "BBB"]);
    }

    #[test]
    fn negative_gap_reads_the_anchor_line_itself() {
        let doc = Document::from_text("Node    Year Mon\n1 1988 1");
        let names = infer_columns(&doc, "Node", -1, 1, MatchCase::Sensitive).unwrap();
        assert_eq!(names, vec!["Node", "Year", "Mon"]);
    }

    #[test]
    fn stacked_labels_join_top_to_bottom() {
        let doc = Document::from_text(concat!(
            "anchor\n",
            "\n",
            "                Total\n",
            "Outfall         Volume",
        ));
        let names = infer_columns(&doc, "anchor", 1, 2, MatchCase::Sensitive).unwrap();
        assert_eq!(names, vec!["Outfall", "Total_Volume"]);
    }

    #[test]
    fn blank_label_rows_yield_zero_columns() {
        let doc = Document::from_text("anchor\n\n   \n   ");
        let names = infer_columns(&doc, "anchor", 1, 2, MatchCase::Sensitive).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn out_of_bounds_labels_are_invalid_configuration() {
        let doc = Document::from_text("anchor");
        let result = infer_columns(&doc, "anchor", 5, 2, MatchCase::Sensitive);
        assert!(matches!(
            result,
            Err(ReadError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn missing_anchor_is_block_not_found() {
        let doc = Document::from_text("nothing to see");
        let result = infer_columns(&doc, "anchor", 0, 1, MatchCase::Sensitive);
        assert!(matches!(result, Err(ReadError::BlockNotFound { .. })));
    }

    #[rstest]
    #[case("Freq Pcnt", "Freq_Pcnt")]
    #[case("Max.  Depth", "Max._Depth")]
    #[case("Flow (CFS)", "Flow_CFS_")]
    #[case("a___b", "a_b")]
    fn sanitise_cases(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitise(raw), expected);
    }
}
