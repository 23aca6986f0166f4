//! Integer matrices and the reference triple-loop product.
//!
//! The threaded benchmark writes into a [`Matrix`] row range at a time,
//! so the kernel in [`naive_ijk`] works on a slice of output rows rather
//! than on the whole of C.

pub mod grid;
pub mod naive_ijk;

pub use grid::Matrix;
