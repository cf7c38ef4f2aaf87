//! Binary encode/decode for the grid record.
//!
//! All integers are big-endian `i32`. The record is a bare
//! `rows, cols, values...` sequence: no magic, no version, no padding.

use std::io::{self, Read, Write};

use basin_core::{Grid, GridLimits};
use tracing::trace;

use crate::error::StoreError;
use crate::{HEADER_LEN, VALUE_LEN};

/// Cells pre-allocated before any value has been read. Larger records
/// grow as values actually arrive, so a lying header cannot force a huge
/// allocation.
const INITIAL_CAPACITY_CAP: usize = 1 << 16;

// ── Primitives ──────────────────────────────────────────────────

/// Write a big-endian i32.
pub fn write_i32_be(w: &mut dyn Write, v: i32) -> Result<(), StoreError> {
    w.write_all(&v.to_be_bytes())?;
    Ok(())
}

/// Read a big-endian i32, reporting end-of-stream as truncation of `field`.
pub fn read_i32_be(
    r: &mut dyn Read,
    field: &'static str,
    cells_read: usize,
) -> Result<i32, StoreError> {
    let mut buf = [0u8; 4];
    match r.read_exact(&mut buf) {
        Ok(()) => Ok(i32::from_be_bytes(buf)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Err(StoreError::Truncated { field, cells_read })
        }
        Err(e) => Err(StoreError::Io(e)),
    }
}

// ── Record encode/decode ────────────────────────────────────────

/// Encoded size of `grid` in bytes.
pub fn encoded_len(grid: &Grid) -> usize {
    HEADER_LEN + grid.len() * VALUE_LEN
}

/// Write `grid` as one record.
///
/// Fails with [`StoreError::HeightOverflow`] if a height exceeds
/// `i32::MAX`; nothing past the offending cell is written.
pub fn write_grid(w: &mut dyn Write, grid: &Grid) -> Result<(), StoreError> {
    // Grid::MAX_DIM keeps both dimensions within i32.
    write_i32_be(w, grid.rows() as i32)?;
    write_i32_be(w, grid.cols() as i32)?;
    for (i, &h) in grid.as_slice().iter().enumerate() {
        let v = i32::try_from(h).map_err(|_| {
            let (row, col) = grid.coords(i);
            StoreError::HeightOverflow { row, col, value: h }
        })?;
        write_i32_be(w, v)?;
    }
    trace!(rows = grid.rows(), cols = grid.cols(), "grid record written");
    Ok(())
}

/// Read one record with no dimension limit beyond what a grid can hold.
pub fn read_grid(r: &mut dyn Read) -> Result<Grid, StoreError> {
    read_grid_with_limits(r, &GridLimits::unbounded())
}

/// Read one record, rejecting dimensions outside `limits` before any
/// cell is read.
///
/// Reads exactly the bytes of one record and leaves the rest of the
/// stream untouched, so records can be read back to back.
pub fn read_grid_with_limits(r: &mut dyn Read, limits: &GridLimits) -> Result<Grid, StoreError> {
    let rows = read_i32_be(r, "rows", 0)?;
    let cols = read_i32_be(r, "cols", 0)?;
    if rows <= 0 || cols <= 0 {
        return Err(StoreError::InvalidDimensions { rows, cols });
    }
    limits.check(rows as usize, cols as usize)?;

    let len = rows as usize * cols as usize;
    let mut values = Vec::with_capacity(len.min(INITIAL_CAPACITY_CAP));
    for i in 0..len {
        values.push(read_i32_be(r, "values", i)?);
    }
    let grid = Grid::from_signed(rows, cols, &values)?;
    trace!(rows, cols, "grid record read");
    Ok(grid)
}

/// Encode `grid` into a fresh buffer.
pub fn encode_grid(grid: &Grid) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::with_capacity(encoded_len(grid));
    write_grid(&mut buf, grid)?;
    Ok(buf)
}

/// Decode exactly one record from `bytes`.
///
/// Unlike [`read_grid`], leftover bytes are an error.
pub fn decode_grid(bytes: &[u8]) -> Result<Grid, StoreError> {
    let mut cursor = bytes;
    let grid = read_grid(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(StoreError::TrailingData {
            bytes: cursor.len(),
        });
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basin_core::GridError;

    fn sample() -> Grid {
        Grid::from_rows(&[vec![3, 3, 3], vec![3, 1, 3], vec![2, 3, 3]]).unwrap()
    }

    #[test]
    fn layout_is_big_endian_row_major() {
        let g = Grid::from_rows(&[vec![1, 2], vec![3, 258]]).unwrap();
        let bytes = encode_grid(&g).unwrap();
        assert_eq!(
            bytes,
            vec![
                0, 0, 0, 2, // rows
                0, 0, 0, 2, // cols
                0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 1, 2,
            ]
        );
        assert_eq!(bytes.len(), encoded_len(&g));
    }

    #[test]
    fn decode_restores_grid() {
        let g = sample();
        let bytes = encode_grid(&g).unwrap();
        assert_eq!(decode_grid(&bytes).unwrap(), g);
    }

    #[test]
    fn records_read_back_to_back() {
        let a = sample();
        let b = Grid::filled(1, 4, 9).unwrap();
        let mut buf = Vec::new();
        write_grid(&mut buf, &a).unwrap();
        write_grid(&mut buf, &b).unwrap();

        let mut cursor = buf.as_slice();
        assert_eq!(read_grid(&mut cursor).unwrap(), a);
        assert_eq!(read_grid(&mut cursor).unwrap(), b);
        assert!(cursor.is_empty());
    }

    #[test]
    fn empty_stream_is_truncated_rows() {
        let err = decode_grid(&[]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Truncated {
                field: "rows",
                cells_read: 0
            }
        ));
    }

    #[test]
    fn partial_values_are_truncated() {
        let mut bytes = encode_grid(&sample()).unwrap();
        bytes.truncate(bytes.len() - 6);
        let err = decode_grid(&bytes).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Truncated {
                field: "values",
                cells_read: 7
            }
        ));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut bytes = encode_grid(&sample()).unwrap();
        bytes.extend_from_slice(&[0, 1]);
        assert!(matches!(
            decode_grid(&bytes),
            Err(StoreError::TrailingData { bytes: 2 })
        ));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0i32.to_be_bytes());
        bytes.extend_from_slice(&3i32.to_be_bytes());
        assert!(matches!(
            decode_grid(&bytes),
            Err(StoreError::InvalidDimensions { rows: 0, cols: 3 })
        ));

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2i32.to_be_bytes());
        bytes.extend_from_slice(&(-1i32).to_be_bytes());
        assert!(matches!(
            decode_grid(&bytes),
            Err(StoreError::InvalidDimensions { rows: 2, cols: -1 })
        ));
    }

    #[test]
    fn negative_height_is_rejected() {
        let mut bytes = Vec::new();
        for v in [1i32, 2, 5, -4] {
            bytes.extend_from_slice(&v.to_be_bytes());
        }
        let err = decode_grid(&bytes).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Grid(GridError::NegativeHeight {
                row: 0,
                col: 1,
                value: -4
            })
        ));
    }

    #[test]
    fn limits_reject_before_reading_cells() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1000i32.to_be_bytes());
        bytes.extend_from_slice(&1i32.to_be_bytes());
        let err = read_grid_with_limits(&mut bytes.as_slice(), &GridLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Grid(GridError::DimensionTooLarge { name: "rows", .. })
        ));
    }

    #[test]
    fn lying_header_fails_without_huge_allocation() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&i32::MAX.to_be_bytes());
        bytes.extend_from_slice(&i32::MAX.to_be_bytes());
        bytes.extend_from_slice(&7i32.to_be_bytes());
        assert!(matches!(
            decode_grid(&bytes),
            Err(StoreError::Truncated {
                field: "values",
                cells_read: 1
            })
        ));
    }

    #[test]
    fn oversize_height_is_rejected_on_write() {
        let g = Grid::new(1, 2, vec![1, u32::MAX]).unwrap();
        assert!(matches!(
            encode_grid(&g),
            Err(StoreError::HeightOverflow {
                row: 0,
                col: 1,
                value: u32::MAX
            })
        ));
    }
}
