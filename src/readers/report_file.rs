//! Reader for SWMM report (`.rpt`) files
//!
//! Report files carry a banner (model version, flow units) followed by
//! titled summary blocks. Block extraction is entirely descriptor-driven:
//! one generic path locates a block by marker, cuts it at the sentinel, and
//! materialises it with the column set resolved for this file's unit family
//! and version. The handful of blocks that are not row-shaped tables
//! (element counts, the two continuity balances) get dedicated builders.

// standard library
use std::collections::HashMap;
use std::path::Path;

// internal modules
use crate::blocks::{block_span, find_marker, MatchCase};
use crate::catalog::report::{
    continuity_columns, ContinuityRow, ELEMENT_COUNT_LABELS, ROUTING_CONTINUITY_ROWS,
    RUNOFF_CONTINUITY_ROWS,
};
use crate::catalog::{self, report, ColumnSource, Descriptor, FormatVersion, UnitFamily};
use crate::columns::infer_columns;
use crate::document::Document;
use crate::error::{ReadError, Result};
use crate::readers::parsers;
use crate::table::{materialize, ColumnSpec, Separator, Table, TableSpec, Value};
use crate::utils::f;

// external crates
use log::{debug, trace};

/// A reader for SWMM report files
///
/// Construction loads the document once and resolves the unit family and
/// format version from the banner; both gate the column names of nearly
/// every block. Tables are computed on first request and cached for the
/// lifetime of the reader.
///
/// Example:
/// ```ignore
///     let mut rpt = ReportReader::from_path("model.rpt")?;
///     let depths = rpt.table("node_depth_results")?;
/// ```
#[derive(Debug)]
pub struct ReportReader {
    /// The report file, loaded once
    document: Document,
    /// Unit family from the `Flow Units` banner line
    units: UnitFamily,
    /// Version from the `VERSION` banner line
    version: FormatVersion,
    /// End-of-block sentinel, configurable because its literal form has
    /// changed between SWMM builds
    sentinel: String,
    /// Tables already computed by this instance
    cache: HashMap<String, Table>,
}

/// High level methods
impl ReportReader {
    /// Read and index the report file at `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_document(Document::from_path(path)?)
    }

    /// Build a reader over lines already in memory
    pub fn from_lines(lines: Vec<String>) -> Result<Self> {
        Self::from_document(Document::from_lines(lines))
    }

    /// Build a reader over an existing document
    pub fn from_document(document: Document) -> Result<Self> {
        let units = Self::read_units(&document)?;
        let version = Self::read_version(&document)?;
        debug!("Report banner: version {version}, {units} units");

        Ok(Self {
            document,
            units,
            version,
            sentinel: report::SENTINEL.to_string(),
            cache: HashMap::new(),
        })
    }

    /// The unit family the file was written in
    pub fn units(&self) -> UnitFamily {
        self.units
    }

    /// The format version from the banner
    pub fn version(&self) -> FormatVersion {
        self.version
    }

    /// Override the end-of-block sentinel literal
    pub fn set_sentinel(&mut self, sentinel: &str) {
        self.sentinel = sentinel.to_string();
        self.cache.clear();
    }

    /// Names of every block in the report catalog
    pub fn block_names() -> impl Iterator<Item = &'static str> {
        report::BLOCKS.iter().map(|block| block.name)
    }

    /// The named block as a table, computed once and cached
    pub fn table(&mut self, name: &str) -> Result<&Table> {
        if !self.cache.contains_key(name) {
            let table = self.build(name)?;
            self.cache.insert(name.to_string(), table);
        }
        Ok(&self.cache[name])
    }
}

/// Banner parsing
impl ReportReader {
    fn read_units(document: &Document) -> Result<UnitFamily> {
        let index = find_marker(document, "Flow Units", 0, MatchCase::Insensitive)?;
        let line = document.line(index).unwrap();
        let (_, value) = parsers::dotted_leader_value(line).map_err(|_| ReadError::Value {
            column: "Flow Units".to_string(),
            value: line.trim().to_string(),
            expected: "a dotted leader line",
        })?;
        value.parse()
    }

    fn read_version(document: &Document) -> Result<FormatVersion> {
        let index = find_marker(document, "VERSION", 0, MatchCase::Insensitive)?;
        let line = document.line(index).unwrap();
        let (_, (major, minor)) = parsers::banner_version(line).map_err(|_| ReadError::Value {
            column: "VERSION".to_string(),
            value: line.trim().to_string(),
            expected: "a major.minor version",
        })?;
        Ok(FormatVersion::new(major, minor))
    }
}

/// Descriptor-driven block extraction
impl ReportReader {
    fn build(&self, name: &str) -> Result<Table> {
        let block =
            catalog::descriptor(report::BLOCKS, name).ok_or_else(|| ReadError::UnsupportedBlock {
                name: name.to_string(),
            })?;
        trace!("Building block {name:?} from marker {:?}", block.marker);

        match name {
            "element_count" => self.element_count(block),
            "runoff_quantity_continuity" => {
                self.continuity(block, RUNOFF_CONTINUITY_ROWS, Self::runoff_fields)
            }
            "flow_routing_continuity" => {
                self.continuity(block, ROUTING_CONTINUITY_ROWS, Self::routing_fields)
            }
            _ => self.tabular_block(block),
        }
    }

    /// Line span of a block, cut at the sentinel or end-of-file
    fn span(&self, block: &Descriptor) -> Result<&[String]> {
        let (start, end) = block_span(
            &self.document,
            block.marker,
            block.descriptor_lines,
            &self.sentinel,
            MatchCase::Insensitive,
        )?;
        trace!("  |_ lines {start}..{end}");
        Ok(self.document.span(start, Some(end)))
    }

    /// The generic path: resolve columns, cut the span, materialise
    fn tabular_block(&self, block: &Descriptor) -> Result<Table> {
        let columns = self.column_specs(block)?;

        let mut spec = TableSpec::new(Separator::Whitespace, columns);
        spec.index = block.index;
        spec.take = block.take;

        let mut table = materialize(self.span(block)?, &spec)?;
        if block.drop_separator_rows {
            table.drop_separator_rows();
        }
        Ok(table)
    }

    /// Column specs from the catalog, or inferred from the header layout
    fn column_specs(&self, block: &Descriptor) -> Result<Vec<ColumnSpec>> {
        match block.source {
            ColumnSource::Fixed => {
                let set = report::columns(block.name, self.units, self.version).ok_or_else(
                    || ReadError::UnsupportedBlock {
                        name: block.name.to_string(),
                    },
                )?;
                Ok(set
                    .iter()
                    .map(|(name, kind)| ColumnSpec::new(*name, *kind))
                    .collect())
            }
            ColumnSource::Inferred {
                blank_gap,
                label_lines,
            } => {
                let mut names = infer_columns(
                    &self.document,
                    block.marker,
                    blank_gap,
                    label_lines,
                    MatchCase::Insensitive,
                )?;
                if names.is_empty() {
                    return Err(ReadError::InvalidConfiguration {
                        reason: f!("no column labels found under {:?}", block.marker),
                    });
                }
                if block.fuse_index_pair && names.len() >= 2 {
                    let tail = names.remove(1);
                    names[0] = f!("{}_{tail}", names[0]);
                }

                // inferred blocks key on their first column, which is always
                // an identifier
                Ok(names
                    .into_iter()
                    .enumerate()
                    .map(|(position, name)| {
                        if position == 0 {
                            ColumnSpec::text(name)
                        } else {
                            ColumnSpec::auto(name)
                        }
                    })
                    .collect())
            }
            ColumnSource::Special => Err(ReadError::InvalidConfiguration {
                reason: f!("block {:?} has no tabular column source", block.name),
            }),
        }
    }
}

/// Blocks that are not row-shaped tables
impl ReportReader {
    /// The element-count listing: dotted leader rows, canonical row keys
    fn element_count(&self, block: &Descriptor) -> Result<Table> {
        let spec = TableSpec::new(
            Separator::Runs('.'),
            vec![ColumnSpec::text("label"), ColumnSpec::text("num_elements")],
        )
        .with_index(0);

        let mut table = materialize(self.span(block)?, &spec)?;
        table.set_index_labels(
            ELEMENT_COUNT_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
        )?;
        Ok(table)
    }

    /// Continuity blocks: labelled rows scanned forward from the marker
    ///
    /// Both balances repeat row labels found elsewhere in the file (the
    /// routing block has its own `Evaporation Loss`), so every label search
    /// starts at the block's own marker rather than the top of the file.
    fn continuity(
        &self,
        block: &Descriptor,
        rows: &[ContinuityRow],
        fields: fn(&str, bool) -> Option<(String, String)>,
    ) -> Result<Table> {
        let marker = find_marker(&self.document, block.marker, 0, MatchCase::Insensitive)?;
        let column_pair = continuity_columns(self.units);

        let mut index = Vec::with_capacity(rows.len());
        let mut data = Vec::with_capacity(rows.len());
        for (label, key) in rows {
            let at = find_marker(&self.document, label, marker, MatchCase::Insensitive)?;
            let line = self.document.line(at).unwrap();

            let is_error_row = label.starts_with("Continuity Error");
            let (volume, depth) = fields(line, is_error_row).ok_or_else(|| ReadError::Value {
                column: (*key).to_string(),
                value: line.trim().to_string(),
                expected: "a continuity row",
            })?;

            index.push((*key).to_string());
            data.push(vec![Value::Text(volume), Value::Text(depth)]);
        }

        Table::from_parts(
            None,
            column_pair.iter().map(|c| c.to_string()).collect(),
            index,
            data,
        )
    }

    /// Runoff balance rows: values sit at fixed token positions
    fn runoff_fields(line: &str, is_error_row: bool) -> Option<(String, String)> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if is_error_row {
            let value = tokens.get(4)?.to_string();
            Some((value.clone(), value))
        } else {
            Some((tokens.get(3)?.to_string(), tokens.get(4)?.to_string()))
        }
    }

    /// Routing balance rows: values are the decimal tokens after the leader
    fn routing_fields(line: &str, is_error_row: bool) -> Option<(String, String)> {
        let decimals: Vec<&str> = line
            .split_whitespace()
            .filter(|token| token.contains('.'))
            .collect();
        if is_error_row {
            let value = decimals.get(1)?.to_string();
            Some((value.clone(), value))
        } else {
            Some((decimals.get(1)?.to_string(), decimals.get(2)?.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> String {
        concat!(
            "  EPA STORM WATER MANAGEMENT MODEL - VERSION 5.1 (Build 5.1.013)\n",
            "\n",
            "  Flow Units ............... CFS\n",
        )
        .to_string()
    }

    fn reader(body: &str) -> ReportReader {
        ReportReader::from_document(Document::from_text(&f!("{}{body}", banner()))).unwrap()
    }

    #[test]
    fn banner_resolves_units_and_version() {
        let rpt = reader("");
        assert_eq!(rpt.units(), UnitFamily::Cfs);
        assert_eq!(rpt.version(), FormatVersion::V5_1);
    }

    #[test]
    fn metric_banner_resolves_lps() {
        let text = "  VERSION 5.1 (Build 5.1.013)\n  Flow Units ............... LPS\n";
        let rpt = ReportReader::from_document(Document::from_text(text)).unwrap();
        assert_eq!(rpt.units(), UnitFamily::Lps);
    }

    #[test]
    fn unknown_units_fail_at_construction() {
        let text = "  VERSION 5.1 (Build 5.1.013)\n  Flow Units ............... GPM\n";
        let result = ReportReader::from_document(Document::from_text(text));
        assert!(matches!(
            result,
            Err(ReadError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn unknown_block_names_are_unsupported() {
        let mut rpt = reader("");
        assert!(matches!(
            rpt.table("groundwater_summary"),
            Err(ReadError::UnsupportedBlock { .. })
        ));
    }

    #[test]
    fn absent_blocks_are_block_not_found() {
        let mut rpt = reader("");
        assert!(matches!(
            rpt.table("node_depth_results"),
            Err(ReadError::BlockNotFound { .. })
        ));
    }

    #[test]
    fn element_count_gets_canonical_row_keys() {
        let rpt_body = concat!(
            "  *************\n",
            "  Element Count\n",
            "  *************\n",
            "  Number of rain gages ...... 1\n",
            "  Number of subcatchments ... 3\n",
            "  Number of nodes ........... 4\n",
            "  Number of links ........... 3\n",
            "  Number of pollutants ...... 0\n",
            "  Number of land uses ....... 0\n",
            "  \n",
        );
        let mut rpt = reader(rpt_body);
        let table = rpt.table("element_count").unwrap();

        assert_eq!(table.index(), ELEMENT_COUNT_LABELS);
        assert_eq!(
            table.get(2, "num_elements"),
            Some(&Value::Text("4".into()))
        );
    }

    #[test]
    fn runoff_continuity_scans_labelled_rows() {
        let rpt_body = concat!(
            "  Runoff Quantity Continuity     Volume         Depth\n",
            "  **************************     acre-feet      inches\n",
            "  Total Precipitation ......         0.452         3.000\n",
            "  Evaporation Loss ..........        0.000         0.000\n",
            "  Infiltration Loss .........        0.307         2.037\n",
            "  Surface Runoff ............        0.140         0.929\n",
            "  Final Storage .............        0.007         0.045\n",
            "  Continuity Error (%) .....        -0.219\n",
            "  \n",
        );
        let mut rpt = reader(rpt_body);
        let table = rpt.table("runoff_quantity_continuity").unwrap();

        assert_eq!(table.columns(), ["Volume_acre_feet", "Depth_inches"]);
        assert_eq!(table.n_rows(), RUNOFF_CONTINUITY_ROWS.len());
        assert_eq!(
            table.row_by_key("Surface_Runoff"),
            Some(&[Value::Text("0.140".into()), Value::Text("0.929".into())][..])
        );
        // the error row repeats its single value in both columns
        assert_eq!(
            table.row_by_key("Continuity_Error_pcnt"),
            Some(&[Value::Text("-0.219".into()), Value::Text("-0.219".into())][..])
        );
    }

    #[test]
    fn tables_are_cached_and_idempotent() {
        let rpt_body = concat!(
            "  *************\n",
            "  Element Count\n",
            "  *************\n",
            "  Number of rain gages ...... 1\n",
            "  Number of subcatchments ... 3\n",
            "  Number of nodes ........... 4\n",
            "  Number of links ........... 3\n",
            "  Number of pollutants ...... 0\n",
            "  Number of land uses ....... 0\n",
            "  \n",
        );
        let mut rpt = reader(rpt_body);
        let first = rpt.table("element_count").unwrap().clone();
        let second = rpt.table("element_count").unwrap().clone();
        assert_eq!(first, second);
    }
}
