//! # The swmmtab crate
//!
//! Readers for extracting EPA SWMM text outputs into typed tables
//!
//! ## Installation
//!
//! Direct install from github:
//!
//! ```shell
//! cargo install --git https://github.com/swmmtab/swmmtab.git
//! ```
//!
//! ## Overview
//!
//! SWMM writes its results as fixed-format, human-readable text: titled
//! summary blocks in the report file, bracketed section cards in the input
//! file, and a wide timestamped table in the routing interface file. This
//! crate locates those blocks by header marker, cuts them at the
//! format-specific sentinel, and materialises the rows into tables with
//! named, typed columns.
//!
//! | Command line | Description                                            |
//! | ------------ | ------------------------------------------------------ |
//! | `block2json` | Extract any named block from a SWMM text file as JSON  |
//! | `inpcheck`   | Report mapped, unmapped, and absent input file cards   |
//!
//! Both tools are documented with detailed `--help` messages.
//!
//! ### Supported file formats
//!
//! | Format                                    | Reader                                        |
//! | ----------------------------------------- | --------------------------------------------- |
//! | Report file (`.rpt`)                      | [ReportReader](crate::readers::ReportReader)  |
//! | Input file (`.inp`)                       | [InpReader](crate::readers::InpReader)        |
//! | Routing interface file                    | [InterfaceReader](crate::readers::InterfaceReader) |
//! | LSPC summary listing (`.out`)             | [LspcSummaryReader](crate::readers::LspcSummaryReader) |
//!
//! Report column names depend on the flow units (`CFS` or `LPS`) and on the
//! format version in the banner, and both are resolved once when the reader
//! is built.
//!
//! ## Advanced use
//!
//! The command line tools are purely for colleagues and convenience; the
//! crate itself is the useful part, since the challenge with SWMM outputs
//! is always parsing the fixed-format text. Reading a block is a one-liner:
//!
//! ```ignore
//! // import the crate
//! use swmmtab::read_report_block;
//!
//! // pull a named block out of a report file
//! let depths = read_report_block("./data/model.rpt", "node_depth_results")?;
//!
//! // now do whatever you want with it:
//! //  - look rows up by node name,
//! //  - feed the typed values into analysis,
//! //  - serialise the lot to JSON,
//! //  - etc...
//! ```
//!
//! As an overview:
//! - The [document] module holds a file as an immutable line store.
//! - The [blocks] module finds where a named block starts and ends.
//! - The [columns] module infers column names from header layout when no
//!   fixed catalog applies.
//! - The [table] module materialises line spans into typed tables.
//! - The [catalog] module is the static descriptor configuration driving
//!   the readers.
//! - The [readers] module wires it all together per file format.
//!
//! In the background, the `nom` parser combinator library handles the
//! structured banner lines, `clap` is used for the command line interfaces,
//! and `serde` allows the tables to be written out as JSON.
//!
//! All of the useful functionality from the file readers is re-exported for
//! convenience.

// Public facing modules
pub mod blocks;
pub mod catalog;
pub mod columns;
pub mod document;
pub mod error;
pub mod table;
pub mod utils;

// note that docs are hidden to prevent confusing the current simple API
pub mod readers;

// Re-exports of useful data structures
#[doc(inline)]
pub use crate::readers::{
    read_input_card, read_interface_table, read_lspc_variables, read_report_block, InpReader,
    InterfaceReader, LspcSummaryReader, ReportReader,
};

#[doc(inline)]
pub use crate::error::{ReadError, Result};

#[doc(inline)]
pub use crate::table::{Table, Value};
