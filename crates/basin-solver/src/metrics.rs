//! Per-solve performance counters.
//!
//! [`SolveMetrics`] captures timing and traversal counts for one run of
//! the solver. They are informational only; nothing in the algorithm
//! reads them back.

/// Timing and traversal counters collected during a single solve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveMetrics {
    /// Wall-clock time for the whole solve, in microseconds.
    pub total_us: u64,
    /// Cells marked visited (frontier expansions plus flooded cells).
    pub cells_visited: u64,
    /// Cells flooded from a neighbour during an expansion.
    pub cells_flooded: u64,
    /// Frontier pushes, including the initial border seeding.
    pub frontier_pushes: u64,
    /// Frontier pops that hit an already-visited cell.
    pub stale_pops: u64,
    /// Frontier entries expanded by a flood-fill.
    pub expansions: u64,
    /// Expansions that retained a positive volume.
    pub basins_filled: u64,
    /// Largest size the flood-fill work stack reached.
    pub peak_stack_depth: usize,
    /// Largest number of entries queued at once, stale duplicates included.
    pub peak_frontier: usize,
}
