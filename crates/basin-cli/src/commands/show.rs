//! Show command - print a stored grid.

use std::path::PathBuf;

use basin::GridLimits;

use super::common::{load_grid, print_grid};
use crate::error::CliError;

/// Run the show command.
pub fn run(file: PathBuf) -> Result<(), CliError> {
    let grid = load_grid(&file, &GridLimits::unbounded())?;
    print_grid(&file.display().to_string(), &grid);
    Ok(())
}
