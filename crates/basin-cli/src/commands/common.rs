//! Helpers shared across CLI commands.

use std::path::Path;

use basin::engine::{BackgroundSolver, DispatchConfig, SolveCompletion};
use basin::store::{load_with_limits, save};
use basin::{Grid, GridLimits, Height};
use tracing::info;

use crate::error::CliError;

/// Check user-supplied dimensions against `limits` before anything is
/// built or solved.
pub fn validate_dims(
    rows: i64,
    cols: i64,
    limits: &GridLimits,
) -> Result<(usize, usize), CliError> {
    if rows <= 0 || cols <= 0 {
        return Err(CliError::Input(format!(
            "Dimensions must be positive, got {} x {}",
            rows, cols
        )));
    }
    let (rows, cols) = (rows as usize, cols as usize);
    if rows > limits.max_rows || cols > limits.max_cols {
        return Err(CliError::Input(format!(
            "Dimensions {} x {} exceed the limit of {} x {}",
            rows, cols, limits.max_rows, limits.max_cols
        )));
    }
    Ok((rows, cols))
}

/// Parse whitespace-separated heights into a `rows x cols` grid.
pub fn parse_grid(text: &str, rows: usize, cols: usize) -> Result<Grid, CliError> {
    let mut cells = Vec::with_capacity(rows * cols);
    for (position, token) in text.split_whitespace().enumerate() {
        let h: Height = token.parse().map_err(|_| CliError::Parse {
            position,
            token: token.to_string(),
        })?;
        cells.push(h);
    }
    if cells.len() != rows * cols {
        return Err(CliError::Input(format!(
            "Expected {} values for a {} x {} grid, got {}",
            rows * cols,
            rows,
            cols,
            cells.len()
        )));
    }
    Ok(Grid::new(rows, cols, cells)?)
}

/// Load a grid file, rejecting dimensions outside `limits`.
pub fn load_grid(path: &Path, limits: &GridLimits) -> Result<Grid, CliError> {
    load_with_limits(path, limits).map_err(|error| CliError::Store {
        path: path.display().to_string(),
        error,
    })
}

/// Save a grid file.
pub fn save_grid(path: &Path, grid: &Grid) -> Result<(), CliError> {
    save(path, grid).map_err(|error| CliError::Store {
        path: path.display().to_string(),
        error,
    })?;
    println!("Saved {} x {} grid to {}", grid.rows(), grid.cols(), path.display());
    Ok(())
}

/// Print a grid under a heading.
pub fn print_grid(heading: &str, grid: &Grid) {
    println!("{} ({} x {}):", heading, grid.rows(), grid.cols());
    println!("{}", grid);
}

/// Render `depths` as a map: `~` where a cell holds water, `.` where it
/// stays dry.
pub fn water_map(depths: &Grid) -> String {
    depths
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|&d| if d > 0 { "~" } else { "." })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Solve `grid` on the background worker and print the result.
pub fn solve_and_report(grid: Grid, limits: GridLimits) -> Result<SolveCompletion, CliError> {
    let solver = BackgroundSolver::new(DispatchConfig {
        limits,
        ..DispatchConfig::default()
    })?;
    let done = solver.solve_blocking(grid)?;
    info!(
        job = %done.job,
        volume = done.volume,
        wet_cells = done.wet_cells,
        visited = done.metrics.cells_visited,
        us = done.metrics.total_us,
        "solve finished"
    );

    println!();
    println!("Trapped water volume: {}", done.volume);
    println!("Wet cells: {} of {}", done.wet_cells, done.depths.len());
    println!();
    print_grid("Resting water levels", &done.resting);
    println!();
    print_grid("Water depth", &done.depths);
    println!();
    println!("Water map (~ wet, . dry):");
    println!("{}", water_map(&done.depths));
    Ok(done)
}
