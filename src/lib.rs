//! Micro-benchmarks for thread spawning overhead and lock contention.
//!
//! I wrote these to see, with real numbers, what threads and mutexes cost.
//! In short: spawning thousands of OS threads for a small matrix multiply
//! is slower than one thread; a mutex per increment is slow but exact; a
//! counter with no synchronization is fast and wrong; and batching the
//! locked updates gets most of the speed back without losing any counts.
//!
//! ## Usage
//!
//! ```
//! use contention::config::BatchConfig;
//! use contention::experiment::run_batched;
//!
//! let config = BatchConfig { iterations: 10_000, batch_size: 100, threads: 2 };
//! let report = run_batched(&config).unwrap();
//!
//! assert_eq!(report.observed, 20_000);
//! println!("{report}");
//! ```
//!
//! Multiplying with an explicit thread count:
//!
//! ```
//! use contention::matrix::Matrix;
//! use contention::multiply_threaded;
//!
//! let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
//! let b = Matrix::from_vec(3, 2, vec![7, 8, 9, 10, 11, 12]);
//! let mut c = Matrix::zeros(2, 2);
//!
//! multiply_threaded(&a, &b, &mut c, 2).unwrap();
//! assert_eq!(c.as_slice(), &[58, 64, 139, 154]);
//! ```
//!
//! ## What's inside
//!
//! - Matrix multiply split into row ranges, one scoped thread per range
//! - Unsynchronized, locked, and batched-lock shared counters
//! - A read-spin-write race that loses updates on purpose

pub mod config;
pub mod counter;
pub mod error;
pub mod experiment;
pub mod matrix;
pub mod threaded;

pub use error::{ContentionError, Result};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use threaded::multiply_threaded;
