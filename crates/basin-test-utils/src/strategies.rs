//! Proptest strategies for height grids.

use basin_core::{Grid, Height};
use proptest::prelude::*;

/// Arbitrary grid with dimensions in `1..=max_dim` and heights in
/// `0..=max_height`.
pub fn arb_grid(max_dim: usize, max_height: Height) -> impl Strategy<Value = Grid> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(0..=max_height, rows * cols)
            .prop_map(move |cells| Grid::new(rows, cols, cells).expect("shape matches"))
    })
}

/// Arbitrary grid whose heights are drawn from a handful of values, so
/// equal-height walls and plateaus are common.
pub fn arb_plateau_grid(max_dim: usize) -> impl Strategy<Value = Grid> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::sample::select(vec![0u32, 2, 2, 5, 5, 5, 9]), rows * cols)
            .prop_map(move |cells| Grid::new(rows, cols, cells).expect("shape matches"))
    })
}
