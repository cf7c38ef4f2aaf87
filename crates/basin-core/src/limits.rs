//! Dimension limits applied before a grid is handed to the solver.

use crate::error::GridError;

/// Upper bounds on grid dimensions accepted from interactive input.
///
/// [`Grid`](crate::Grid) itself only enforces [`Grid::MAX_DIM`](crate::Grid::MAX_DIM);
/// these limits are the tighter, user-facing policy. The defaults accept
/// 1 to 999 rows and columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLimits {
    /// Maximum number of rows. Default: 999.
    pub max_rows: usize,
    /// Maximum number of columns. Default: 999.
    pub max_cols: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_rows: 999,
            max_cols: 999,
        }
    }
}

impl GridLimits {
    /// Limits that accept anything a [`Grid`](crate::Grid) can hold.
    pub fn unbounded() -> Self {
        Self {
            max_rows: crate::Grid::MAX_DIM,
            max_cols: crate::Grid::MAX_DIM,
        }
    }

    /// Check a requested shape against these limits.
    ///
    /// Zero dimensions are rejected as [`GridError::EmptyGrid`]; oversize
    /// dimensions as [`GridError::DimensionTooLarge`].
    pub fn check(&self, rows: usize, cols: usize) -> Result<(), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        if rows > self.max_rows {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: self.max_rows,
            });
        }
        if cols > self.max_cols {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: self.max_cols,
            });
        }
        Ok(())
    }
}
