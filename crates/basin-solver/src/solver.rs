//! The trapped-water solver.
//!
//! [`WaterVolumeSolver`] borrows an input [`Grid`], seeds its frontier
//! with the border on construction, and runs the priority flood on
//! [`solve()`](WaterVolumeSolver::solve).
//!
//! # Ownership model
//!
//! The input terrain is borrowed immutably for the solver's lifetime, so
//! it cannot change underneath a run. Traversal state (visited marks,
//! frontier, work stack) is owned by the solver and released with it.
//! Nothing is shared between solvers: each run is independent and can be
//! moved to another thread as a whole.

use std::time::Instant;

use basin_core::{Grid, Height};
use tracing::debug;

use crate::frontier::Frontier;
use crate::metrics::SolveMetrics;
use crate::options::SolverOptions;

// Compile-time assertion: a solver can be moved to a worker thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<WaterVolumeSolver<'static>>();
        assert_send::<Solution>();
    }
};

// ── Solution ────────────────────────────────────────────────────

/// Owned result of a completed solve.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Total trapped volume.
    pub volume: u64,
    /// Resting water level of every cell, same shape as the input.
    ///
    /// A cell that holds water reports the level of its basin; a dry cell
    /// reports its own height.
    pub resting: Grid,
    /// Water depth of every cell (`resting - terrain`), same shape as the
    /// input. Dry cells are zero.
    pub depths: Grid,
    /// Counters for this run.
    pub metrics: SolveMetrics,
}

impl Solution {
    /// Number of cells holding water above their own height.
    pub fn wet_cells(&self) -> usize {
        self.depths.as_slice().iter().filter(|&&d| d > 0).count()
    }
}

// ── WaterVolumeSolver ───────────────────────────────────────────

/// Priority-flood solver over a borrowed height grid.
///
/// # Example
///
/// ```
/// use basin_core::Grid;
/// use basin_solver::WaterVolumeSolver;
///
/// let terrain = Grid::from_rows(&[
///     vec![3, 3, 4, 4, 4, 2],
///     vec![3, 1, 3, 2, 1, 4],
///     vec![7, 3, 1, 6, 4, 1],
/// ])
/// .unwrap();
/// let mut solver = WaterVolumeSolver::new(&terrain);
/// assert!(solver.resting_levels().is_none());
/// assert_eq!(solver.solve(), 5);
/// assert_eq!(solver.resting_levels().unwrap().get(1, 1), Some(3));
/// ```
pub struct WaterVolumeSolver<'g> {
    grid: &'g Grid,
    resting: Grid,
    visited: Vec<bool>,
    frontier: Frontier,
    stack: Vec<usize>,
    total: u64,
    solved: bool,
    metrics: SolveMetrics,
}

impl<'g> WaterVolumeSolver<'g> {
    /// Create a solver with default options, seeding the border.
    pub fn new(grid: &'g Grid) -> Self {
        Self::with_options(grid, &SolverOptions::default())
    }

    /// Create a solver, seeding the border in the order `options` selects.
    ///
    /// Every border cell is pushed exactly once, tagged with its own
    /// height. No interior cell is queued yet.
    pub fn with_options(grid: &'g Grid, options: &SolverOptions) -> Self {
        let seeds = options.seed_order.border_sequence(grid);
        let mut frontier = Frontier::with_capacity(seeds.len() * 2);
        for index in seeds {
            frontier.push(grid.as_slice()[index], index);
        }
        let metrics = SolveMetrics {
            peak_frontier: frontier.len(),
            ..SolveMetrics::default()
        };
        Self {
            grid,
            resting: grid.clone(),
            visited: vec![false; grid.len()],
            frontier,
            stack: Vec::new(),
            total: 0,
            solved: false,
            metrics,
        }
    }

    /// Run the flood to completion and return the trapped volume.
    ///
    /// A second call returns the same total without traversing again.
    pub fn solve(&mut self) -> u64 {
        if self.solved {
            return self.total;
        }
        let _span = tracing::debug_span!(
            "solve",
            rows = self.grid.rows(),
            cols = self.grid.cols()
        )
        .entered();
        let start = Instant::now();

        while let Some((level, index)) = self.frontier.pop() {
            if self.visited[index] {
                self.metrics.stale_pops += 1;
                continue;
            }
            let gained = self.expand(index, level);
            self.metrics.expansions += 1;
            if gained > 0 {
                self.metrics.basins_filled += 1;
            }
            self.total += gained;
        }

        self.metrics.frontier_pushes = self.frontier.pushes();
        self.metrics.total_us = start.elapsed().as_micros() as u64;
        self.solved = true;
        self.stack = Vec::new();

        debug!(
            volume = self.total,
            visited = self.metrics.cells_visited,
            pushes = self.metrics.frontier_pushes,
            stale = self.metrics.stale_pops,
            peak_stack = self.metrics.peak_stack_depth,
            peak_frontier = self.metrics.peak_frontier,
            us = self.metrics.total_us,
            "solve complete"
        );
        self.total
    }

    /// Flood-fill from `seed` at `level`; returns the volume gained.
    ///
    /// Unvisited neighbours no higher than `level` are flooded to it and
    /// expanded in turn; higher ones are queued as new walls. Visited
    /// cells are never revisited or requeued.
    fn expand(&mut self, seed: usize, level: Height) -> u64 {
        let heights = self.grid.as_slice();
        let resting = self.resting.as_mut_slice();
        let mut gained = 0u64;

        self.visited[seed] = true;
        self.metrics.cells_visited += 1;
        self.stack.push(seed);

        while let Some(cell) = self.stack.pop() {
            for n in self.grid.neighbours(cell) {
                if self.visited[n] {
                    continue;
                }
                let h = heights[n];
                if h <= level {
                    gained += u64::from(level - h);
                    resting[n] = level;
                    self.visited[n] = true;
                    self.metrics.cells_visited += 1;
                    self.metrics.cells_flooded += 1;
                    self.stack.push(n);
                } else {
                    self.frontier.push(h, n);
                }
            }
            self.metrics.peak_stack_depth = self.metrics.peak_stack_depth.max(self.stack.len());
            self.metrics.peak_frontier = self.metrics.peak_frontier.max(self.frontier.len());
        }
        gained
    }

    /// Whether [`solve()`](Self::solve) has completed.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Trapped volume, or `None` before solving.
    pub fn volume(&self) -> Option<u64> {
        self.solved.then_some(self.total)
    }

    /// Resting-level grid, or `None` before solving.
    pub fn resting_levels(&self) -> Option<&Grid> {
        self.solved.then_some(&self.resting)
    }

    /// Counters for the run so far.
    pub fn metrics(&self) -> &SolveMetrics {
        &self.metrics
    }

    /// Consume the solver, solving first if needed, and return the result.
    pub fn into_solution(mut self) -> Solution {
        let volume = self.solve();
        let mut depths = self.resting.clone();
        for (d, &h) in depths.as_mut_slice().iter_mut().zip(self.grid.as_slice()) {
            *d -= h;
        }
        Solution {
            volume,
            resting: self.resting,
            depths,
            metrics: self.metrics,
        }
    }
}
