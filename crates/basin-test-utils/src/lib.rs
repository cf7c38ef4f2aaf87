//! Test utilities for Basin development.
//!
//! Provides the canonical [`scenarios`] with known volumes, proptest
//! strategies for arbitrary grids in [`strategies`], and an independent
//! brute-force reference solver ([`reference_levels`],
//! [`reference_volume`]) to check the priority flood against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod strategies;

use basin_core::{Grid, Height};

/// A named terrain with its known trapped volume.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub grid: Grid,
    pub volume: u64,
}

fn scenario(name: &'static str, rows: &[&[Height]], volume: u64) -> Scenario {
    Scenario {
        name,
        grid: Grid::from_rows(rows).expect("fixture grids are well-formed"),
        volume,
    }
}

/// The reference terrains and their expected volumes.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        scenario("pit_3x3", &[&[3, 3, 3], &[3, 1, 3], &[2, 3, 3]], 2),
        scenario(
            "ridges_3x6",
            &[&[3, 3, 4, 4, 4, 2], &[3, 1, 3, 2, 1, 4], &[7, 3, 1, 6, 4, 1]],
            5,
        ),
        scenario("single_cell", &[&[1]], 0),
        scenario("uniform_3x3", &[&[5, 5, 5], &[5, 5, 5], &[5, 5, 5]], 0),
        scenario(
            "leetcode_3x6",
            &[&[1, 4, 3, 1, 3, 2], &[3, 2, 1, 3, 2, 4], &[2, 3, 3, 2, 3, 1]],
            4,
        ),
        scenario(
            "moat_5x5",
            &[
                &[3, 3, 3, 3, 3],
                &[3, 2, 2, 2, 3],
                &[3, 2, 1, 2, 3],
                &[3, 2, 2, 2, 3],
                &[3, 3, 3, 3, 3],
            ],
            10,
        ),
    ]
}

/// Resting water levels by fixed-point relaxation.
///
/// A cell's level is the lowest, over all paths to the border, of the
/// highest cell on the path. Starting from "everything full" and
/// relaxing `level = max(height, min(neighbour levels))` until nothing
/// changes converges to exactly that. Quadratic at best; small grids only.
pub fn reference_levels(grid: &Grid) -> Grid {
    let heights = grid.as_slice();
    let top = grid.max_height();
    let mut levels = grid.clone();
    for (i, level) in levels.as_mut_slice().iter_mut().enumerate() {
        if !grid.is_border(i) {
            *level = top;
        }
    }

    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..grid.len() {
            if grid.is_border(i) {
                continue;
            }
            let lowest = grid
                .neighbours(i)
                .iter()
                .map(|&n| levels.as_slice()[n])
                .min()
                .unwrap_or(heights[i]);
            let next = heights[i].max(lowest);
            if next < levels.as_slice()[i] {
                levels.as_mut_slice()[i] = next;
                changed = true;
            }
        }
    }
    levels
}

/// Trapped volume computed from [`reference_levels`].
pub fn reference_volume(grid: &Grid) -> u64 {
    reference_levels(grid)
        .as_slice()
        .iter()
        .zip(grid.as_slice())
        .map(|(&level, &h)| u64::from(level - h))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_agrees_with_fixtures() {
        for s in scenarios() {
            assert_eq!(reference_volume(&s.grid), s.volume, "{}", s.name);
        }
    }

    #[test]
    fn reference_leaves_border_untouched() {
        let s = &scenarios()[1];
        let levels = reference_levels(&s.grid);
        for i in s.grid.border_indices() {
            assert_eq!(levels.as_slice()[i], s.grid.as_slice()[i]);
        }
    }
}
