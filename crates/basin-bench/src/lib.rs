//! Benchmark terrains for the Basin solver.
//!
//! - [`reference_profile`]: 100x100 random terrain (10K cells)
//! - [`stress_profile`]: 316x316 random terrain (~100K cells)
//! - [`nested_rings`]: concentric walls, one basin inside another

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use basin_core::{random_fill, FillConfig, Grid, GridError, Height};

/// 100x100 terrain with heights in `0..=10`.
pub fn reference_profile(seed: u64) -> Result<Grid, GridError> {
    random_fill(100, 100, &profile_config(seed))
}

/// 316x316 terrain with heights in `0..=10`.
///
/// Same distribution as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> Result<Grid, GridError> {
    random_fill(316, 316, &profile_config(seed))
}

fn profile_config(seed: u64) -> FillConfig {
    FillConfig {
        seed,
        ..FillConfig::default()
    }
}

/// Square terrain of concentric rings whose walls grow toward the border.
///
/// Ring `k` (counting inward from the border) has height
/// `2 * (rings - k)` on walls and zero in the gaps, so every gap is a
/// separate basin and the frontier sees many distinct levels.
pub fn nested_rings(side: usize) -> Result<Grid, GridError> {
    let rings = side.div_ceil(2);
    let mut cells = Vec::with_capacity(side * side);
    for r in 0..side {
        for c in 0..side {
            let k = r.min(c).min(side - 1 - r).min(side - 1 - c);
            let h = if k % 2 == 0 { 2 * (rings - k) } else { 0 };
            cells.push(h as Height);
        }
    }
    Grid::new(side, side, cells)
}
