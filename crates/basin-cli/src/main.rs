//! Basin CLI - Command-line interface
//!
//! Builds height grids (typed in, random, or loaded from a grid file),
//! computes how much rain water they trap, and prints the resting water
//! level of every cell along with a map of which cells hold water.

mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use basin::Height;
use commands::input::InputArgs;
use commands::random::RandomArgs;
use commands::solve::SolveArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "basin")]
#[command(version, about = "Compute rain water trapped by a 2D height grid", long_about = None)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a grid file and compute its trapped water
    Solve {
        /// Grid file to solve
        file: PathBuf,

        /// Write the resting water levels to this file
        #[arg(long)]
        levels: Option<PathBuf>,
    },

    /// Generate a grid of uniformly random heights
    Random {
        /// Number of rows (1-999)
        #[arg(long, allow_negative_numbers = true)]
        rows: i64,

        /// Number of columns (1-999)
        #[arg(long, allow_negative_numbers = true)]
        cols: i64,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Lowest height generated
        #[arg(long, default_value = "0")]
        min: Height,

        /// Highest height generated
        #[arg(long, default_value = "10")]
        max: Height,

        /// Save the generated grid to this file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Solve the generated grid
        #[arg(long)]
        solve: bool,
    },

    /// Build a grid from typed-in heights
    Input {
        /// Number of rows (1-999)
        #[arg(long, allow_negative_numbers = true)]
        rows: i64,

        /// Number of columns (1-999)
        #[arg(long, allow_negative_numbers = true)]
        cols: i64,

        /// Whitespace-separated heights, row-major (read from stdin if omitted)
        #[arg(long)]
        values: Option<String>,

        /// Save the grid to this file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Solve the grid
        #[arg(long)]
        solve: bool,
    },

    /// Print a stored grid
    Show {
        /// Grid file to print
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        e.exit();
    }

    if let Err(e) = run(cli.command) {
        e.exit();
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Solve { file, levels } => commands::solve::run(SolveArgs { file, levels }),
        Commands::Random {
            rows,
            cols,
            seed,
            min,
            max,
            save,
            solve,
        } => commands::random::run(RandomArgs {
            rows,
            cols,
            seed,
            min,
            max,
            save,
            solve,
        }),
        Commands::Input {
            rows,
            cols,
            values,
            save,
            solve,
        } => commands::input::run(InputArgs {
            rows,
            cols,
            values,
            save,
            solve,
        }),
        Commands::Show { file } => commands::show::run(file),
    }
}
