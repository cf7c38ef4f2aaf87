//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::io;
use std::process;

use basin::{ConfigError, GridError, StoreError, SubmitError};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Bad command-line input (dimensions, height range, values)
    Input(String),
    /// A value in the grid text is not a non-negative integer
    Parse { position: usize, token: String },
    /// The grid could not be built
    Grid(GridError),
    /// Failed to read or write a grid file
    Store { path: String, error: StoreError },
    /// Failed to read grid values from standard input
    Stdin(io::Error),
    /// The background solver could not be started
    Engine(ConfigError),
    /// The background solver refused the job
    Dispatch(SubmitError),
}

impl CliError {
    /// Process exit code for this error: 2 for bad input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input(_) | CliError::Parse { .. } | CliError::Grid(_) => 2,
            _ => 1,
        }
    }

    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Input(_) | CliError::Grid(GridError::DimensionTooLarge { .. }) => {
                eprintln!();
                eprintln!("Rows and columns must each be between 1 and 999.");
            }
            CliError::Store {
                error: StoreError::Truncated { .. } | StoreError::InvalidDimensions { .. },
                ..
            } => {
                eprintln!();
                eprintln!("The file does not look like a grid record:");
                eprintln!("  big-endian i32 rows, cols, then rows*cols heights.");
            }
            _ => {}
        }

        process::exit(self.exit_code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Input(msg) => write!(f, "{}", msg),
            CliError::Parse { position, token } => {
                write!(
                    f,
                    "Value #{} ({:?}) is not a non-negative integer",
                    position + 1,
                    token
                )
            }
            CliError::Grid(e) => write!(f, "Invalid grid: {}", e),
            CliError::Store { path, error } => write!(f, "Grid file '{}': {}", path, error),
            CliError::Stdin(e) => write!(f, "Failed to read values from stdin: {}", e),
            CliError::Engine(e) => write!(f, "Failed to start solver: {}", e),
            CliError::Dispatch(e) => write!(f, "Solve failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Grid(e) => Some(e),
            CliError::Store { error, .. } => Some(error),
            CliError::Stdin(e) => Some(e),
            CliError::Engine(e) => Some(e),
            CliError::Dispatch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        CliError::Grid(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Engine(e)
    }
}

impl From<SubmitError> for CliError {
    fn from(e: SubmitError) -> Self {
        CliError::Dispatch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_exit_with_usage_code() {
        assert_eq!(CliError::Input("bad".into()).exit_code(), 2);
        let parse = CliError::Parse {
            position: 0,
            token: "x".into(),
        };
        assert_eq!(parse.exit_code(), 2);
        assert_eq!(CliError::Dispatch(SubmitError::Shutdown).exit_code(), 1);
    }

    #[test]
    fn parse_error_is_one_based() {
        let e = CliError::Parse {
            position: 2,
            token: "-4".into(),
        };
        assert_eq!(e.to_string(), "Value #3 (\"-4\") is not a non-negative integer");
    }

    #[test]
    fn store_error_names_the_file() {
        let e = CliError::Store {
            path: "terrain.grid".into(),
            error: StoreError::TrailingData { bytes: 3 },
        };
        assert!(e.to_string().contains("terrain.grid"));
        assert!(std::error::Error::source(&e).is_some());
    }
}
