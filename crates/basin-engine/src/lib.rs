//! Background solve dispatch for Basin.
//!
//! [`BackgroundSolver`] runs each solve on a dedicated worker thread so
//! the caller's thread stays responsive, and publishes the result as a
//! [`SolveCompletion`] carrying the job id, trapped volume, resting-level
//! grid, and solver metrics.
//!
//! ```
//! use basin_core::Grid;
//! use basin_engine::BackgroundSolver;
//!
//! let solver = BackgroundSolver::with_defaults().unwrap();
//! let grid = Grid::from_rows(&[[3, 3, 3], [3, 1, 3], [2, 3, 3]]).unwrap();
//! let done = solver.solve_blocking(grid).unwrap();
//! assert_eq!(done.volume, 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod job;
mod worker;

pub use config::{ConfigError, DispatchConfig};
pub use dispatch::{BackgroundSolver, ShutdownReport, SubmitError};
pub use job::{JobId, SolveCompletion};
