//! Tabular output types
//!
//! # Overview
//!
//! Every block accessor in this crate hands back the same [Table] type, no
//! matter which file format or block it came from. Rows are ordered, columns
//! are named, cells are typed [Value]s, and one column may be promoted to
//! the row key.
//!
//! ```rust
//! use swmmtab::table::{materialize, ColumnSpec, Separator, TableSpec};
//!
//! let lines = ["J1  2.5", "J2  3.0"];
//! let spec = TableSpec::new(
//!     Separator::Whitespace,
//!     vec![ColumnSpec::text("Name"), ColumnSpec::auto("Depth")],
//! )
//! .with_index(0);
//!
//! let table = materialize(&lines, &spec).unwrap();
//! assert_eq!(table.index(), ["J1", "J2"]);
//! ```

// Split into subfiles for development, but anything important is re-exported
mod core;
mod value;

#[doc(inline)]
pub use crate::table::core::{materialize, Separator, Table, TableSpec};

#[doc(inline)]
pub use crate::table::value::{ColumnSpec, ColumnType, Value};
