//! Row-major height grid with 4-connected neighbourhood.

use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

use crate::error::GridError;

/// Height of a single terrain cell.
pub type Height = u32;

/// Flat indices of a cell's in-bounds orthogonal neighbours.
pub type Neighbours = SmallVec<[usize; 4]>;

/// A `rows x cols` matrix of non-negative heights.
///
/// Cells are stored row-major in a flat buffer: cell `(row, col)` lives
/// at index `row * cols + col`. Both dimensions are at least 1 and at
/// most [`Grid::MAX_DIM`], so every coordinate fits an `i32` and the
/// grid round-trips through the persistence record unchanged.
///
/// The shape of a `Grid` is fixed once built. The solver borrows the
/// input terrain immutably and reports resting water levels in a second
/// grid of the same shape.
///
/// # Examples
///
/// ```
/// use basin_core::Grid;
///
/// let grid = Grid::from_rows(&[vec![3, 3, 3], vec![3, 1, 3], vec![2, 3, 3]]).unwrap();
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.get(1, 1), Some(1));
/// assert!(grid.is_border(grid.index_of(2, 0).unwrap()));
/// assert!(!grid.is_border(grid.index_of(1, 1).unwrap()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Height>,
}

impl Grid {
    /// Maximum dimension size: coordinates are persisted as `i32`.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Build a grid from a row-major flat buffer.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), and `Err(GridError::ShapeMismatch)` if
    /// `cells.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, cells: Vec<Height>) -> Result<Self, GridError> {
        let expected = check_dims(rows, cols)?;
        if cells.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid where every cell has the same height.
    pub fn filled(rows: usize, cols: usize, height: Height) -> Result<Self, GridError> {
        let len = check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![height; len],
        })
    }

    /// Build a grid from nested rows, inferring the shape.
    ///
    /// The column count is taken from the first row; every other row must
    /// match it.
    pub fn from_rows<R: AsRef<[Height]>>(data: &[R]) -> Result<Self, GridError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |r| r.as_ref().len());
        Self::from_nested(rows, cols, data)
    }

    /// Build a grid from nested rows against a declared shape.
    ///
    /// Rejects a declared row count that disagrees with `data.len()` and
    /// any row whose length is not `cols`.
    pub fn from_nested<R: AsRef<[Height]>>(
        rows: usize,
        cols: usize,
        data: &[R],
    ) -> Result<Self, GridError> {
        let expected = check_dims(rows, cols)?;
        if data.len() != rows {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: data.iter().map(|r| r.as_ref().len()).sum(),
            });
        }
        let mut cells = Vec::with_capacity(expected);
        for (row, values) in data.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from signed values, as read from an `i32` record.
    ///
    /// Negative dimensions are reported as [`GridError::EmptyGrid`];
    /// negative heights as [`GridError::NegativeHeight`].
    pub fn from_signed(rows: i32, cols: i32, values: &[i32]) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::EmptyGrid {
                rows: rows.max(0) as usize,
                cols: cols.max(0) as usize,
            });
        }
        let (rows, cols) = (rows as usize, cols as usize);
        let expected = check_dims(rows, cols)?;
        if values.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }
        let mut cells = Vec::with_capacity(expected);
        for (i, &v) in values.iter().enumerate() {
            let h = Height::try_from(v).map_err(|_| GridError::NegativeHeight {
                row: i / cols,
                col: i % cols,
                value: i64::from(v),
            })?;
            cells.push(h);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row-major view of all heights.
    pub fn as_slice(&self) -> &[Height] {
        &self.cells
    }

    /// Mutable row-major view of all heights.
    ///
    /// Heights may be rewritten in place; the shape cannot change.
    pub fn as_mut_slice(&mut self) -> &mut [Height] {
        &mut self.cells
    }

    /// Height at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Height> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Height at a flat index, or `None` when out of bounds.
    pub fn at(&self, index: usize) -> Option<Height> {
        self.cells.get(index).copied()
    }

    /// Flat index of `(row, col)`, or `None` when out of bounds.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Flat index of `(row, col)`, reporting out-of-bounds as an error.
    pub fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        self.index_of(row, col).ok_or(GridError::CellOutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// `(row, col)` of a flat index. The index must be in bounds.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.cells.len());
        (index / self.cols, index % self.cols)
    }

    /// Whether the cell lies on the outer boundary of the grid.
    pub fn is_border(&self, index: usize) -> bool {
        let (r, c) = self.coords(index);
        r == 0 || c == 0 || r + 1 == self.rows || c + 1 == self.cols
    }

    /// Flat indices of every border cell, each exactly once, in row-major
    /// order.
    ///
    /// Cells on two edges (corners, or every cell of a single-row or
    /// single-column grid) are yielded once.
    pub fn border_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cells.len()).filter(move |&i| self.is_border(i))
    }

    /// Flat indices of the in-bounds orthogonal neighbours of `index`.
    ///
    /// Edges absorb: a corner has two neighbours, an edge cell three. The
    /// order is north, south, west, east.
    pub fn neighbours(&self, index: usize) -> Neighbours {
        let (r, c) = self.coords(index);
        let mut result = Neighbours::new();
        if r > 0 {
            result.push(index - self.cols);
        }
        if r + 1 < self.rows {
            result.push(index + self.cols);
        }
        if c > 0 {
            result.push(index - 1);
        }
        if c + 1 < self.cols {
            result.push(index + 1);
        }
        result
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Height]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Copy the grid into nested rows.
    pub fn to_nested(&self) -> Vec<Vec<Height>> {
        self.iter_rows().map(<[Height]>::to_vec).collect()
    }

    /// Largest height in the grid.
    pub fn max_height(&self) -> Height {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Height;

    fn index(&self, (row, col): (usize, usize)) -> &Height {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_height().to_string().len();
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, h) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{h:>width$}")?;
            }
        }
        Ok(())
    }
}

/// Validate dimensions and return the cell count.
fn check_dims(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid { rows, cols });
    }
    if rows > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: Grid::MAX_DIM,
        });
    }
    if cols > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: Grid::MAX_DIM,
        });
    }
    rows.checked_mul(cols).ok_or(GridError::DimensionTooLarge {
        name: "rows",
        value: rows,
        max: usize::MAX / cols,
    })
}
