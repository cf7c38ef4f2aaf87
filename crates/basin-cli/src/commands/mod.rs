//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`input`] - Build a grid from typed-in values
//! - [`random`] - Generate a random grid
//! - [`show`] - Print a stored grid
//! - [`solve`] - Solve a stored grid

pub mod common;
pub mod input;
pub mod random;
pub mod show;
pub mod solve;
