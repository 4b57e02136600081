//! Reader for SWMM input (`.inp`) files
//!
//! Input files are the model definition: bracketed section cards with
//! whitespace-delimited rows and free placement of `;` comments. A section
//! runs until the next bracketed tag, so the sentinel is simply `[`.
//!
//! Construction enumerates every tag in the file up front. Tags the catalog
//! has no descriptor for are collected into a queryable set rather than
//! failing the load - a model using exotic cards still opens, and only a
//! request for one of those cards reports the gap.

// standard library
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

// internal modules
use crate::blocks::{block_span, strip_comments, MatchCase};
use crate::catalog::{self, input, ColumnSource, Descriptor};
use crate::document::Document;
use crate::error::{ReadError, Result};
use crate::readers::parsers;
use crate::table::{materialize, ColumnSpec, Separator, Table, TableSpec, Value};

// external crates
use log::{debug, trace};

/// A reader for SWMM input files
///
/// Example:
/// ```ignore
///     let mut inp = InpReader::from_path("model.inp")?;
///     let junctions = inp.table("junctions")?;
///     assert!(inp.unmapped_tags().is_empty());
/// ```
#[derive(Debug)]
pub struct InpReader {
    /// The input file, loaded once
    document: Document,
    /// Section tags present in the file, lowercased
    tags_in_file: BTreeSet<String>,
    /// Tags in the file with no catalog descriptor
    unmapped: BTreeSet<String>,
    /// Catalogued cards absent from the file
    missing: BTreeSet<String>,
    /// Tables already computed by this instance
    cache: HashMap<String, Table>,
}

/// High level methods
impl InpReader {
    /// Read and index the input file at `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_document(Document::from_path(path)?)
    }

    /// Build a reader over lines already in memory
    pub fn from_lines(lines: Vec<String>) -> Result<Self> {
        Self::from_document(Document::from_lines(lines))
    }

    /// Build a reader over an existing document
    pub fn from_document(document: Document) -> Result<Self> {
        let tags_in_file: BTreeSet<String> = document
            .lines()
            .iter()
            .filter(|line| parsers::is_section_tag(line))
            .filter_map(|line| parsers::section_tag(line).ok())
            .map(|(_, tag)| tag.to_lowercase())
            .collect();

        let known: BTreeSet<String> = input::BLOCKS
            .iter()
            .map(|block| block.name.to_string())
            .collect();

        let unmapped: BTreeSet<String> = tags_in_file.difference(&known).cloned().collect();
        let missing: BTreeSet<String> = known.difference(&tags_in_file).cloned().collect();
        debug!(
            "Input file carries {} sections ({} unmapped)",
            tags_in_file.len(),
            unmapped.len()
        );

        Ok(Self {
            document,
            tags_in_file,
            unmapped,
            missing,
            cache: HashMap::new(),
        })
    }

    /// Section tags present in the file, lowercased
    pub fn tags_in_file(&self) -> &BTreeSet<String> {
        &self.tags_in_file
    }

    /// Tags in the file that no descriptor covers
    ///
    /// Format-coverage gaps are detectable here without triggering an error
    /// per missing block.
    pub fn unmapped_tags(&self) -> &BTreeSet<String> {
        &self.unmapped
    }

    /// Catalogued cards the file does not contain
    pub fn missing_cards(&self) -> &BTreeSet<String> {
        &self.missing
    }

    /// Names of every card in the input catalog
    pub fn card_names() -> impl Iterator<Item = &'static str> {
        input::BLOCKS.iter().map(|block| block.name)
    }

    /// The named section as a table, computed once and cached
    ///
    /// Distinguishes three failures: a name outside the catalog is
    /// [ReadError::UnsupportedBlock], a catalogued card with no parser is
    /// [ReadError::NotImplemented], and a parseable card missing from this
    /// particular file is [ReadError::BlockNotFound].
    pub fn table(&mut self, name: &str) -> Result<&Table> {
        if !self.cache.contains_key(name) {
            let table = self.build(name)?;
            self.cache.insert(name.to_string(), table);
        }
        Ok(&self.cache[name])
    }
}

/// Descriptor-driven section extraction
impl InpReader {
    fn build(&self, name: &str) -> Result<Table> {
        let block =
            catalog::descriptor(input::BLOCKS, name).ok_or_else(|| ReadError::UnsupportedBlock {
                name: name.to_string(),
            })?;
        if !block.implemented {
            return Err(ReadError::NotImplemented {
                name: name.to_string(),
            });
        }
        trace!("Building card {name:?} from marker {:?}", block.marker);

        let columns = self.column_specs(block)?;
        let mut spec = TableSpec::new(Separator::Whitespace, columns);
        spec.index = block.index;
        spec.take = block.take;

        let (start, end) = block_span(
            &self.document,
            block.marker,
            block.descriptor_lines,
            input::SENTINEL,
            MatchCase::Sensitive,
        )?;
        let lines = strip_comments(self.document.span(start, Some(end)), input::COMMENT);

        let mut table = materialize(&lines, &spec)?;
        if block.realign_short_rows {
            realign_short_rows(&mut table);
        }
        Ok(table)
    }

    fn column_specs(&self, block: &Descriptor) -> Result<Vec<ColumnSpec>> {
        match block.source {
            ColumnSource::Fixed => {
                let set =
                    input::columns(block.name).ok_or_else(|| ReadError::UnsupportedBlock {
                        name: block.name.to_string(),
                    })?;
                Ok(set
                    .iter()
                    .map(|(name, kind)| ColumnSpec::new(*name, *kind))
                    .collect())
            }
            _ => Err(ReadError::InvalidConfiguration {
                reason: format!("input card {:?} has no fixed column source", block.name),
            }),
        }
    }
}

/// Realign curve continuation rows
///
/// A curve card's first row names the curve type (`NAME TYPE X Y`), while
/// continuation rows drop it (`NAME X Y`) and parse one field short. Those
/// rows shift right so X/Y land in their columns and the type reads empty.
fn realign_short_rows(table: &mut Table) {
    for row in table.rows_mut() {
        if row.len() == 3 && row[2].is_empty() {
            row[2] = std::mem::replace(&mut row[1], Value::Empty);
            row.swap(0, 1);
        }
    }
}
