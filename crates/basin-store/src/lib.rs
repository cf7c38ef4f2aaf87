//! Persistence for Basin height grids.
//!
//! Grids are stored as a flat binary record with no header:
//!
//! ```text
//! [rows i32] [cols i32] [value i32] x rows*cols
//! ```
//!
//! All integers are big-endian two's complement, values row-major. A
//! resting-level grid uses exactly the same record as the terrain it was
//! computed from, so either can be reloaded and re-solved.
//!
//! # Architecture
//!
//! - [`codec`] encodes and decodes records over any `Write` / `Read`
//! - [`file`] wraps the codec with buffered path-based [`save`] / [`load`]
//! - [`StoreError`] covers I/O, truncation, and malformed records

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod file;

pub use codec::{
    decode_grid, encode_grid, encoded_len, read_grid, read_grid_with_limits, write_grid,
};
pub use error::StoreError;
pub use file::{load, load_with_limits, save};

/// Size of the `rows` + `cols` prefix in bytes.
pub const HEADER_LEN: usize = 8;

/// Size of one encoded height in bytes.
pub const VALUE_LEN: usize = 4;
