//! Basin: trapped rain water over 2D height grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Basin sub-crates. A height grid is a rectangle of non-negative integers;
//! rain falls on every cell and escapes off any border edge. [`solve`]
//! computes how much stays trapped and the level it settles at in each cell.
//!
//! # Quick start
//!
//! ```rust
//! use basin::prelude::*;
//!
//! let grid = Grid::from_rows(&[
//!     [3, 3, 4, 4, 4, 2],
//!     [3, 1, 3, 2, 1, 4],
//!     [7, 3, 1, 6, 4, 1],
//! ])
//! .unwrap();
//!
//! let solution = solve(&grid);
//! assert_eq!(solution.volume, 5);
//! assert_eq!(solution.resting.get(1, 1), Some(3));
//!
//! let bytes = basin::store::encode_grid(&solution.resting).unwrap();
//! assert_eq!(basin::store::decode_grid(&bytes).unwrap(), solution.resting);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `basin-core` | Height grid, limits, random terrain |
//! | [`solver`] | `basin-solver` | Priority-flood solver and metrics |
//! | [`engine`] | `basin-engine` | Background solve worker |
//! | [`store`] | `basin-store` | Binary grid records |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Height grids, dimension limits, and random terrain (`basin-core`).
pub use basin_core as grid;

/// The priority-flood solver (`basin-solver`).
///
/// [`solver::WaterVolumeSolver`] for step-by-step access,
/// [`solver::solve`] for a one-shot [`solver::Solution`].
pub use basin_solver as solver;

/// Background solve dispatch (`basin-engine`).
pub use basin_engine as engine;

/// Binary grid persistence (`basin-store`).
///
/// [`store::save`] and [`store::load`] for files, [`store::write_grid`]
/// and [`store::read_grid`] for any stream.
pub use basin_store as store;

pub use basin_core::{random_fill, FillConfig, Grid, GridError, GridLimits, Height};
pub use basin_engine::{
    BackgroundSolver, ConfigError, DispatchConfig, JobId, SolveCompletion, SubmitError,
};
pub use basin_solver::{
    solve, solve_with, SeedOrder, SolveMetrics, Solution, SolverOptions, WaterVolumeSolver,
};
pub use basin_store::StoreError;

/// Common imports for typical Basin usage.
///
/// ```rust
/// use basin::prelude::*;
/// ```
pub mod prelude {
    // Grids
    pub use basin_core::{random_fill, FillConfig, Grid, GridLimits, Height};

    // Solving
    pub use basin_engine::{BackgroundSolver, DispatchConfig, SolveCompletion};
    pub use basin_solver::{solve, Solution, SolverOptions, WaterVolumeSolver};
}
