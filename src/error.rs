//! Board Errors
//!
//! Failures that prevent a board from being built at all. A board that
//! breaks a puzzle rule is not an error: the checks report that as `false`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or constructing a [`Board`](crate::Board).
#[derive(Error, Debug)]
pub enum BoardError {
    /// The board file could not be read.
    #[error("failed to read board from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No rows at all.
    #[error("board is empty")]
    Empty,

    /// A row whose length differs from the first row.
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Row count and row length disagree.
    #[error("board is not square: {rows} rows of width {width}")]
    NotSquare { rows: usize, width: usize },

    /// A frame with no interior cells.
    #[error("board of size {size} has no interior cells")]
    TooSmall { size: usize },
}

pub type Result<T> = std::result::Result<T, BoardError>;
