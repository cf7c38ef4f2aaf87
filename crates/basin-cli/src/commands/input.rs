//! Input command - build a grid from values typed by the user.

use std::io::{self, Read};
use std::path::PathBuf;

use basin::GridLimits;

use super::common::{parse_grid, print_grid, save_grid, solve_and_report, validate_dims};
use crate::error::CliError;

/// Arguments for the input command.
pub struct InputArgs {
    pub rows: i64,
    pub cols: i64,
    pub values: Option<String>,
    pub save: Option<PathBuf>,
    pub solve: bool,
}

/// Run the input command.
///
/// Values come from `--values` when given, otherwise from stdin, as
/// whitespace-separated heights in row-major order.
pub fn run(args: InputArgs) -> Result<(), CliError> {
    let limits = GridLimits::default();
    let (rows, cols) = validate_dims(args.rows, args.cols, &limits)?;

    let text = match args.values {
        Some(text) => text,
        None => {
            eprintln!("Enter {} heights ({} rows of {}), then EOF:", rows * cols, rows, cols);
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            buf
        }
    };
    let grid = parse_grid(&text, rows, cols)?;

    print_grid("Terrain", &grid);
    if let Some(path) = &args.save {
        save_grid(path, &grid)?;
    }
    if args.solve {
        solve_and_report(grid, limits)?;
    }
    Ok(())
}
