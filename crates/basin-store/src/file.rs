//! Path-based save and load.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use basin_core::{Grid, GridLimits};
use tracing::debug;

use crate::codec::{read_grid_with_limits, write_grid};
use crate::error::StoreError;

/// Write `grid` to `path`, creating or truncating the file.
pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<(), StoreError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_grid(&mut writer, grid)?;
    writer.flush()?;
    debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "grid saved"
    );
    Ok(())
}

/// Load the single grid record stored at `path`.
///
/// The file must hold exactly one record; extra bytes are reported as
/// [`StoreError::TrailingData`].
pub fn load(path: impl AsRef<Path>) -> Result<Grid, StoreError> {
    load_with_limits(path, &GridLimits::unbounded())
}

/// Like [`load`], but rejects dimensions outside `limits` before reading
/// any cell.
pub fn load_with_limits(path: impl AsRef<Path>, limits: &GridLimits) -> Result<Grid, StoreError> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let grid = read_grid_with_limits(&mut reader, limits)?;

    let mut rest = Vec::new();
    reader.read_to_end(&mut rest)?;
    if !rest.is_empty() {
        return Err(StoreError::TrailingData { bytes: rest.len() });
    }
    debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "grid loaded"
    );
    Ok(grid)
}
