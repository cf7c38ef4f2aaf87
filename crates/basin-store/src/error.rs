//! Error types for grid persistence.

use std::fmt;
use std::io;

use basin_core::GridError;

/// Errors that can occur while saving or loading a grid record.
#[derive(Debug)]
pub enum StoreError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream ended before the record was complete.
    Truncated {
        /// Which part of the record was being read.
        field: &'static str,
        /// Cells read before the stream ended.
        cells_read: usize,
    },
    /// The record declares a non-positive dimension.
    InvalidDimensions {
        /// Declared rows.
        rows: i32,
        /// Declared columns.
        cols: i32,
    },
    /// Bytes remain after a complete record.
    TrailingData {
        /// Number of unread bytes.
        bytes: usize,
    },
    /// A height does not fit the record's `i32` values.
    HeightOverflow {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The height.
        value: u32,
    },
    /// The decoded values do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { field, cells_read } => {
                write!(f, "record truncated while reading {field} (after {cells_read} cells)")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "record declares invalid dimensions {rows}x{cols}")
            }
            Self::TrailingData { bytes } => {
                write!(f, "{bytes} trailing bytes after grid record")
            }
            Self::HeightOverflow { row, col, value } => {
                write!(f, "height {value} at ({row}, {col}) exceeds i32::MAX")
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for StoreError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
