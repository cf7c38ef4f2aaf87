//! Job identifiers and completion events.

use std::fmt;
use std::time::Instant;

use basin_core::Grid;
use basin_solver::{SolveMetrics, Solution};

/// Identifier assigned to each accepted submission, in submission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{}", self.0)
    }
}

/// A grid on its way to the worker.
pub(crate) struct Job {
    pub id: JobId,
    pub grid: Grid,
    pub submitted_at: Instant,
}

/// Result of one background solve, published when the job finishes.
#[derive(Clone, Debug)]
pub struct SolveCompletion {
    /// The job this result belongs to.
    pub job: JobId,
    /// Total trapped volume.
    pub volume: u64,
    /// Resting water level of every cell.
    pub resting: Grid,
    /// Water depth of every cell; zero where the cell stays dry.
    pub depths: Grid,
    /// Number of cells holding water.
    pub wet_cells: usize,
    /// Solver counters for the run.
    pub metrics: SolveMetrics,
    /// Microseconds from submission to completion, queueing included.
    pub latency_us: u64,
}

impl SolveCompletion {
    pub(crate) fn new(job: JobId, solution: Solution, submitted_at: Instant) -> Self {
        Self {
            job,
            volume: solution.volume,
            wet_cells: solution.wet_cells(),
            resting: solution.resting,
            depths: solution.depths,
            metrics: solution.metrics,
            latency_us: submitted_at.elapsed().as_micros() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ids_order_by_sequence() {
        assert!(JobId(1) < JobId(2));
        assert_eq!(JobId(7).to_string(), "job-7");
    }

    #[test]
    fn completion_carries_solution() {
        let grid = Grid::from_rows(&[vec![3, 3, 3], vec![3, 1, 3], vec![2, 3, 3]]).unwrap();
        let solution = basin_solver::solve(&grid);
        let done = SolveCompletion::new(JobId(0), solution.clone(), Instant::now());
        assert_eq!(done.volume, 2);
        assert_eq!(done.resting, solution.resting);
        assert_eq!(done.depths, solution.depths);
        assert_eq!(done.wet_cells, 1);
        assert_eq!(done.depths.get(1, 1), Some(2));
        assert_eq!(done.metrics, solution.metrics);
    }
}
