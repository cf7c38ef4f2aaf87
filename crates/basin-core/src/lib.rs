//! Core types for the Basin trapped-water solver.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! height [`Grid`] every other crate consumes, the [`GridError`] returned
//! when a grid cannot be built, dimension [`GridLimits`], and seeded
//! random terrain generation in [`terrain`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod limits;
pub mod terrain;

pub use error::GridError;
pub use grid::{Grid, Height, Neighbours};
pub use limits::GridLimits;
pub use terrain::{random_fill, FillConfig};
