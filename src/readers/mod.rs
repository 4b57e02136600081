#![doc(hidden)]
//! Library of readers and common functions for the supported file formats

// internal modules
use crate::error::Result;
use crate::table::Table;

// standard library
use std::path::Path;

// files under the readers module
mod input_file;
mod interface_file;
mod lspc_file;
pub mod parsers;
mod report_file;

// inline important the reader types for a nice API
#[doc(inline)]
pub use crate::readers::report_file::ReportReader;

#[doc(inline)]
pub use crate::readers::input_file::InpReader;

#[doc(inline)]
pub use crate::readers::interface_file::InterfaceReader;

#[doc(inline)]
pub use crate::readers::lspc_file::LspcSummaryReader;

/// Read one named block from a SWMM report file
///
/// Returns the materialised [Table] for `block`, with column names resolved
/// for the file's unit family and format version.
///
/// - `path` - Path to the report file, can be [&str], [String], [Path], etc...
/// - `block` - Block name, e.g. `"node_depth_results"`
///
/// Example
/// ```ignore
/// // Pull the node depth summary out of a report
/// let depths = swmmtab::read_report_block("path/to/model.rpt", "node_depth_results")?;
/// ```
pub fn read_report_block<P: AsRef<Path>>(path: P, block: &str) -> Result<Table> {
    let mut reader = ReportReader::from_path(path)?;
    reader.table(block).cloned()
}

/// Read one section card from a SWMM input file
///
/// - `path` - Path to the input file
/// - `card` - Card name, e.g. `"junctions"`
///
/// Example
/// ```ignore
/// let junctions = swmmtab::read_input_card("path/to/model.inp", "junctions")?;
/// ```
pub fn read_input_card<P: AsRef<Path>>(path: P, card: &str) -> Result<Table> {
    let mut reader = InpReader::from_path(path)?;
    reader.table(card).cloned()
}

/// Read the wide data table from a SWMM routing interface file
///
/// Column names are inferred from the file's own header line, so the table
/// carries whatever constituents the writing model produced.
///
/// Example
/// ```ignore
/// let table = swmmtab::read_interface_table("path/to/routing.txt")?;
/// ```
pub fn read_interface_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let mut reader = InterfaceReader::from_path(path)?;
    reader.table().cloned()
}

/// Read the variable listing from an LSPC summary file
///
/// Example
/// ```ignore
/// let variables = swmmtab::read_lspc_variables("path/to/results.out")?;
/// ```
pub fn read_lspc_variables<P: AsRef<Path>>(path: P) -> Result<Table> {
    let mut reader = LspcSummaryReader::from_path(path)?;
    reader.variables().cloned()
}
