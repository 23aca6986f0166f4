//! Thread-per-partition matrix multiply.
//!
//! Output rows are split into contiguous ranges, one per thread, and every
//! thread runs the plain i-j-k kernel over its own rows. There is no
//! adaptive thread count here: the point is to measure what spawning
//! `threads` OS threads costs, so the caller's count is used as given.

pub mod row_split;

pub use row_split::{multiply_threaded, partition_rows};
