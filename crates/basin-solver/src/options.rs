//! Solver options.

use basin_core::Grid;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Order in which border cells are pushed onto the frontier.
///
/// Equal-height frontier entries leave in insertion order, so this picks
/// the tie-break among border cells of the same height. The trapped volume
/// is the same for every order; only which equal-height wall expands first
/// changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedOrder {
    /// Row-major order (the default).
    #[default]
    RowMajor,
    /// Reverse row-major order.
    Reversed,
    /// Deterministic shuffle with a ChaCha8 RNG.
    Shuffled {
        /// RNG seed.
        seed: u64,
    },
}

impl SeedOrder {
    /// Border cell indices of `grid` in this order.
    pub fn border_sequence(&self, grid: &Grid) -> Vec<usize> {
        let mut cells: Vec<usize> = grid.border_indices().collect();
        match *self {
            Self::RowMajor => {}
            Self::Reversed => cells.reverse(),
            Self::Shuffled { seed } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                cells.shuffle(&mut rng);
            }
        }
        cells
    }
}

/// Options for [`WaterVolumeSolver`](crate::WaterVolumeSolver).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// Border seeding order. Default: [`SeedOrder::RowMajor`].
    pub seed_order: SeedOrder,
}
