//! Solve command - load a stored grid and compute its trapped water.

use std::path::PathBuf;

use basin::GridLimits;

use super::common::{load_grid, print_grid, save_grid, solve_and_report};
use crate::error::CliError;

/// Arguments for the solve command.
pub struct SolveArgs {
    pub file: PathBuf,
    pub levels: Option<PathBuf>,
}

/// Run the solve command.
pub fn run(args: SolveArgs) -> Result<(), CliError> {
    let limits = GridLimits::default();
    let grid = load_grid(&args.file, &limits)?;
    print_grid("Terrain", &grid);

    let done = solve_and_report(grid, limits)?;
    if let Some(path) = &args.levels {
        save_grid(path, &done.resting)?;
    }
    Ok(())
}
