//! Row partitioning and the scoped-thread multiply.

use std::ops::Range;
use std::thread;

use tracing::debug;

use crate::error::{ContentionError, Result};
use crate::matrix::Matrix;
use crate::matrix::naive_ijk::matmul_rows_ijk;

/// Splits `rows` output rows into `threads` contiguous ranges.
///
/// Every range holds `rows / threads` rows except the last, which also
/// takes the remainder. With more threads than rows all ranges but the
/// last are empty.
pub fn partition_rows(rows: usize, threads: usize) -> Result<Vec<Range<usize>>> {
    if threads == 0 {
        return Err(ContentionError::ZeroThreads);
    }

    let rows_per_thread = rows / threads;
    let remainder_rows = rows % threads;

    let ranges = (0..threads)
        .map(|tid| {
            let start = tid * rows_per_thread;
            let end = if tid == threads - 1 {
                start + rows_per_thread + remainder_rows
            } else {
                start + rows_per_thread
            };
            start..end
        })
        .collect();

    Ok(ranges)
}

/// Computes C = A * B with one OS thread per row partition.
///
/// Each thread gets a mutable borrow of its own block of C rows, so the
/// writes are disjoint without any locking. All threads are joined before
/// returning, including the ones whose partition is empty.
///
/// # Errors
///
/// * [`ContentionError::ZeroThreads`] if `threads == 0`
/// * [`ContentionError::DimensionMismatch`] if A's columns differ from B's rows
/// * [`ContentionError::Spawn`] if the OS refuses to create a thread
/// * [`ContentionError::WorkerPanicked`] if any worker panicked
///
/// # Panics
///
/// Panics if C is not `A.rows() × B.cols()`.
pub fn multiply_threaded(a: &Matrix, b: &Matrix, c: &mut Matrix, threads: usize) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(ContentionError::DimensionMismatch {
            left: a.cols(),
            right: b.rows(),
        });
    }
    assert_eq!(c.rows(), a.rows(), "C: expected {} rows", a.rows());
    assert_eq!(c.cols(), b.cols(), "C: expected {} columns", b.cols());

    let partitions = partition_rows(a.rows(), threads)?;
    let (inner, cols) = (a.cols(), b.cols());
    let (a, b) = (a.as_slice(), b.as_slice());

    thread::scope(|s| -> Result<()> {
        let mut rest = c.as_mut_slice();
        let mut handles = Vec::with_capacity(partitions.len());

        for (tid, range) in partitions.into_iter().enumerate() {
            let (block, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * cols);
            rest = tail;

            debug!(tid, start = range.start, end = range.end, "spawning matmul worker");
            let handle = thread::Builder::new()
                .name(format!("matmul-{tid}"))
                .spawn_scoped(s, move || matmul_rows_ijk(a, b, block, range.start, inner, cols))?;
            handles.push(handle);
        }

        let mut panicked = false;
        for handle in handles {
            panicked |= handle.join().is_err();
        }
        if panicked {
            return Err(ContentionError::WorkerPanicked);
        }
        Ok(())
    })
}
