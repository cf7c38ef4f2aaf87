//! Random command - generate a terrain with uniformly random heights.

use std::path::PathBuf;

use basin::{random_fill, FillConfig, GridLimits, Height};
use tracing::info;

use super::common::{print_grid, save_grid, solve_and_report, validate_dims};
use crate::error::CliError;

/// Arguments for the random command.
pub struct RandomArgs {
    pub rows: i64,
    pub cols: i64,
    pub seed: Option<u64>,
    pub min: Height,
    pub max: Height,
    pub save: Option<PathBuf>,
    pub solve: bool,
}

/// Run the random command.
pub fn run(args: RandomArgs) -> Result<(), CliError> {
    let limits = GridLimits::default();
    let (rows, cols) = validate_dims(args.rows, args.cols, &limits)?;
    if args.min > args.max {
        return Err(CliError::Input(format!(
            "--min {} is greater than --max {}",
            args.min, args.max
        )));
    }

    // Unseeded runs still print their seed so they can be reproduced.
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = FillConfig {
        min_height: args.min,
        max_height: args.max,
        seed,
    };
    let grid = random_fill(rows, cols, &config)?;
    info!(rows, cols, seed, "random terrain generated");

    println!("Seed: {}", seed);
    print_grid("Terrain", &grid);
    if let Some(path) = &args.save {
        save_grid(path, &grid)?;
    }
    if args.solve {
        solve_and_report(grid, limits)?;
    }
    Ok(())
}
