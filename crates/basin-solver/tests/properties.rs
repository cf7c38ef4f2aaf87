//! Property tests for the priority-flood solver.
//!
//! Each property runs against random grids from `basin-test-utils`;
//! agreement with the brute-force relaxation solver is the main oracle.

use basin_core::Grid;
use basin_solver::{solve, solve_with, SeedOrder, SolverOptions, WaterVolumeSolver};
use basin_test_utils::strategies::{arb_grid, arb_plateau_grid};
use basin_test_utils::{reference_levels, reference_volume};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_reference_solver(grid in arb_grid(9, 12)) {
        let solution = solve(&grid);
        prop_assert_eq!(solution.volume, reference_volume(&grid));
        prop_assert_eq!(&solution.resting, &reference_levels(&grid));
    }

    #[test]
    fn border_cells_never_hold_water(grid in arb_grid(10, 20)) {
        let solution = solve(&grid);
        for i in grid.border_indices() {
            prop_assert_eq!(solution.resting.as_slice()[i], grid.as_slice()[i]);
        }
    }

    #[test]
    fn volume_is_sum_of_depths(grid in arb_grid(10, 20)) {
        let solution = solve(&grid);
        let mut sum = 0u64;
        for (&level, &h) in solution.resting.as_slice().iter().zip(grid.as_slice()) {
            prop_assert!(level >= h);
            sum += u64::from(level - h);
        }
        prop_assert_eq!(solution.volume, sum);
        prop_assert_eq!(solution.resting.rows(), grid.rows());
        prop_assert_eq!(solution.resting.cols(), grid.cols());
    }

    #[test]
    fn solving_twice_is_identical(grid in arb_grid(10, 20)) {
        let a = solve(&grid);
        let b = solve(&grid);
        prop_assert_eq!(a.volume, b.volume);
        prop_assert_eq!(a.resting, b.resting);
    }

    #[test]
    fn seed_order_does_not_change_volume(grid in arb_plateau_grid(10), seed in any::<u64>()) {
        let base = solve(&grid).volume;
        for seed_order in [SeedOrder::Reversed, SeedOrder::Shuffled { seed }] {
            let solution = solve_with(&grid, &SolverOptions { seed_order });
            prop_assert_eq!(solution.volume, base);
        }
    }

    #[test]
    fn flat_grid_holds_nothing(rows in 1usize..15, cols in 1usize..15, h in 0u32..100) {
        let grid = Grid::filled(rows, cols, h).unwrap();
        prop_assert_eq!(solve(&grid).volume, 0);
    }

    #[test]
    fn every_cell_is_visited_once(grid in arb_grid(10, 20)) {
        let mut solver = WaterVolumeSolver::new(&grid);
        solver.solve();
        let m = solver.metrics();
        prop_assert_eq!(m.cells_visited, grid.len() as u64);
        // Each cell is pushed as a border seed or from at most four sides.
        prop_assert!(m.frontier_pushes <= 5 * grid.len() as u64);
    }
}

#[test]
fn raising_a_rim_never_loses_water() {
    let low = Grid::from_rows(&[vec![2, 2, 2], vec![2, 0, 2], vec![2, 2, 2]]).unwrap();
    let high = Grid::from_rows(&[vec![2, 6, 2], vec![6, 0, 6], vec![2, 6, 2]]).unwrap();
    assert_eq!(solve(&low).volume, 2);
    assert_eq!(solve(&high).volume, 6);
}
