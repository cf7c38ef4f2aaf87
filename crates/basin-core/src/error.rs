//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising when a height grid is built from caller data.
///
/// Every variant is detected at construction time. Once a [`Grid`](crate::Grid)
/// exists it is well-formed, and nothing downstream re-validates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// One of the dimensions is zero.
    EmptyGrid {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },
    /// A dimension exceeds the permitted maximum.
    DimensionTooLarge {
        /// Which axis (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending value.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
    /// The number of cells supplied does not match `rows * cols`.
    ShapeMismatch {
        /// `rows * cols` as declared.
        expected: usize,
        /// Number of cells actually supplied.
        actual: usize,
    },
    /// A nested row has the wrong number of columns.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Declared column count.
        expected: usize,
        /// Length of the supplied row.
        found: usize,
    },
    /// A height from a signed source is negative.
    NegativeHeight {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The negative value.
        value: i64,
    },
    /// A coordinate lies outside the grid.
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
    /// A random-fill height range has `min > max`.
    InvalidHeightRange {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must have at least one row and column, got {rows}x{cols}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} columns, expected {expected}"),
            Self::NegativeHeight { row, col, value } => {
                write!(f, "cell ({row}, {col}) has negative height {value}")
            }
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "cell ({row}, {col}) out of bounds for {rows}x{cols} grid"),
            Self::InvalidHeightRange { min, max } => {
                write!(f, "height range {min}..={max} is empty")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_values() {
        let e = GridError::RaggedRow {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(e.to_string(), "row 2 has 3 columns, expected 4");

        let e = GridError::NegativeHeight {
            row: 0,
            col: 1,
            value: -7,
        };
        assert!(e.to_string().contains("-7"));

        let e = GridError::EmptyGrid { rows: 0, cols: 3 };
        assert!(e.to_string().contains("0x3"));
    }
}
