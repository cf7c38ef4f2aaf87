//! Priority-flood solver for water trapped over a 2D height grid.
//!
//! Given a [`Grid`] of non-negative heights, computes how much water the
//! terrain retains when every border cell drains freely, together with
//! the resting water level of every cell.
//!
//! # Algorithm
//!
//! Border cells seed a min-height frontier. The solver repeatedly pops
//! the lowest unexpanded boundary cell and flood-fills from it at that
//! cell's height: every reachable unvisited cell no higher than the level
//! is flooded to it, and every higher neighbour joins the frontier as a new
//! wall. Expanding the lowest wall first guarantees no later expansion can
//! lower a level already assigned. The flood-fill runs on an explicit work
//! stack, so stack depth never depends on grid size.
//!
//! # Example
//!
//! ```
//! use basin_core::Grid;
//!
//! let terrain = Grid::from_rows(&[vec![3, 3, 3], vec![3, 1, 3], vec![2, 3, 3]]).unwrap();
//! let solution = basin_solver::solve(&terrain);
//! assert_eq!(solution.volume, 2);
//! assert_eq!(solution.resting.get(1, 1), Some(3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod frontier;
pub mod metrics;
pub mod options;
pub mod solver;

pub use metrics::SolveMetrics;
pub use options::{SeedOrder, SolverOptions};
pub use solver::{Solution, WaterVolumeSolver};

use basin_core::Grid;

/// Solve `grid` with default options and return the owned result.
pub fn solve(grid: &Grid) -> Solution {
    solve_with(grid, &SolverOptions::default())
}

/// Solve `grid` with explicit options and return the owned result.
pub fn solve_with(grid: &Grid, options: &SolverOptions) -> Solution {
    let mut solver = WaterVolumeSolver::with_options(grid, options);
    solver.solve();
    solver.into_solution()
}
