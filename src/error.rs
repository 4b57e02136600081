//! Error types for the file readers
//!
//! Every reader accessor is independently fallible. A failure to extract one
//! block says nothing about its siblings, so errors carry enough context to
//! tell the cases apart:
//!
//! - [ReadError::BlockNotFound] - the header marker is absent from the file
//! - [ReadError::UnsupportedBlock] - the file contains a section this crate
//!   has no descriptor for
//! - [ReadError::NotImplemented] - the descriptor exists but parsing is
//!   deliberately unimplemented
//! - [ReadError::InvalidConfiguration] - a bad parameter rejected up front
//! - [ReadError::Value] / [ReadError::RowShape] - malformed data inside an
//!   otherwise well-formed block

use std::path::PathBuf;

use thiserror::Error;

/// Anything that can go wrong while extracting tables from a SWMM text file
#[derive(Debug, Error)]
pub enum ReadError {
    /// File could not be opened or read
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Header marker absent from the scanned document
    #[error("block marker {marker:?} not found in document")]
    BlockNotFound { marker: String },

    /// Section exists in the file but has no descriptor in the catalog
    #[error("section {name:?} is not mapped to any known block")]
    UnsupportedBlock { name: String },

    /// Descriptor exists but the block is deliberately unimplemented
    #[error("block {name:?} is not currently supported")]
    NotImplemented { name: String },

    /// Bad construction-time parameter or descriptor configuration
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A typed column contained a field that failed to coerce
    #[error("column {column:?}: could not parse {value:?} as {expected}")]
    Value {
        column: String,
        value: String,
        expected: &'static str,
    },

    /// A data row carried more fields than the column spec allows
    #[error("row {row} has {found} fields, expected at most {expected}")]
    RowShape {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, ReadError>;
