//! Reader for SWMM routing interface files
//!
//! Interface files hand one model's outflows to another model as inflows.
//! The layout is a prose header stating how many constituents and nodes
//! follow, the listings themselves, a single column-label line, then one
//! wide fixed-format table of timestamped values per node.
//!
//! The label line is the only place the column names exist - they change
//! with the constituents - so the wide table's names come from the column
//! inferrer rather than any catalog.

// standard library
use std::path::Path;

// internal modules
use crate::blocks::{find_marker, MatchCase};
use crate::columns::infer_columns;
use crate::document::Document;
use crate::error::{ReadError, Result};
use crate::readers::parsers;
use crate::table::{materialize, ColumnSpec, Separator, Table, TableSpec};

// external crates
use log::{debug, trace};

/// Marker of the line counting listed nodes
const NODE_COUNT: &str = "number of nodes";

/// Marker of the line counting listed constituents
const CONSTITUENT_COUNT: &str = "number of constituents";

/// A reader for SWMM routing interface files
///
/// Example:
/// ```ignore
///     let mut iface = InterfaceReader::from_path("routing.txt")?;
///     let nodes = iface.nodes()?.to_vec();
///     let table = iface.table()?;
/// ```
#[derive(Debug)]
pub struct InterfaceReader {
    /// The interface file, loaded once
    document: Document,
    /// Listed node names, computed on first access
    nodes: Option<Vec<String>>,
    /// Constituent name/unit pairs in file order, computed on first access
    constituents: Option<Vec<(String, String)>>,
    /// The wide data table, computed on first access
    table: Option<Table>,
}

impl InterfaceReader {
    /// Read the interface file at `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_document(Document::from_path(path)?))
    }

    /// Build a reader over lines already in memory
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self::from_document(Document::from_lines(lines))
    }

    /// Build a reader over an existing document
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            nodes: None,
            constituents: None,
            table: None,
        }
    }

    /// Names of the nodes listed in the header region
    pub fn nodes(&mut self) -> Result<&[String]> {
        if self.nodes.is_none() {
            let (start, count) = self.counted_listing(NODE_COUNT)?;
            let nodes = self
                .document
                .span(start, Some(start + count))
                .iter()
                .map(|line| line.trim().to_string())
                .collect::<Vec<String>>();
            debug!("{} interface nodes listed", nodes.len());
            self.nodes = Some(nodes);
        }
        Ok(self.nodes.as_ref().unwrap())
    }

    /// Constituent name and unit pairs, in file order
    pub fn constituents(&mut self) -> Result<&[(String, String)]> {
        if self.constituents.is_none() {
            let (start, count) = self.counted_listing(CONSTITUENT_COUNT)?;
            let mut pairs = Vec::with_capacity(count);
            for line in self.document.span(start, Some(start + count)) {
                let mut tokens = line.split_whitespace();
                let name = tokens.next().ok_or_else(|| ReadError::Value {
                    column: "constituent".to_string(),
                    value: line.trim().to_string(),
                    expected: "a name and unit pair",
                })?;
                let unit = tokens.next().unwrap_or_default();
                pairs.push((name.to_string(), unit.to_string()));
            }
            self.constituents = Some(pairs);
        }
        Ok(self.constituents.as_ref().unwrap())
    }

    /// The header region: everything through the node listing
    pub fn header(&mut self) -> Result<String> {
        let end = self.header_end()?;
        Ok(self.document.span(0, Some(end)).join("\n"))
    }

    /// The wide data table, with inferred column names
    pub fn table(&mut self) -> Result<&Table> {
        if self.table.is_none() {
            let table = self.build_table()?;
            self.table = Some(table);
        }
        Ok(self.table.as_ref().unwrap())
    }

    /// Exclusive end of the header region
    fn header_end(&mut self) -> Result<usize> {
        let count_line = find_marker(&self.document, NODE_COUNT, 0, MatchCase::Sensitive)?;
        let nodes = self.nodes()?.len();
        Ok(count_line + nodes + 1)
    }

    /// First line index and entry count of a counted listing
    fn counted_listing(&self, marker: &str) -> Result<(usize, usize)> {
        let at = find_marker(&self.document, marker, 0, MatchCase::Sensitive)?;
        let line = self.document.line(at).unwrap();
        let (_, count) = parsers::leading_count(line).map_err(|_| ReadError::Value {
            column: marker.to_string(),
            value: line.trim().to_string(),
            expected: "a leading entry count",
        })?;
        trace!("{count} entries under {marker:?}");
        Ok((at + 1, count))
    }

    fn build_table(&mut self) -> Result<Table> {
        // the label line follows the node listing directly; `Node` anchors
        // it and the search is case-sensitive so the prose `number of
        // nodes` line cannot shadow it
        let mut names = infer_columns(&self.document, "Node", -1, 1, MatchCase::Sensitive)?;
        if names.is_empty() {
            return Err(ReadError::InvalidConfiguration {
                reason: "no column labels on the interface header line".to_string(),
            });
        }
        names[0] = "Node".to_string();

        let columns = names
            .into_iter()
            .enumerate()
            .map(|(position, name)| {
                if position == 0 {
                    ColumnSpec::text(name)
                } else {
                    ColumnSpec::auto(name)
                }
            })
            .collect();

        let start = self.header_end()? + 1;
        let spec = TableSpec::new(Separator::Whitespace, columns);
        materialize(self.document.span(start, None), &spec)
    }
}
