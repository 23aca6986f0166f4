//! Matrix multiply at a sweep of thread counts.

use std::time::Instant;

use rand::Rng;
use tracing::{info, warn};

use super::report::MatmulTiming;
use crate::config::MatmulConfig;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::threaded::multiply_threaded;

/// Fills A and B from `rng`, then times the threaded multiply once per
/// configured thread count.
///
/// A fresh C is allocated for every run so no run sees a previous result.
pub fn run_matmul<R: Rng>(config: &MatmulConfig, rng: &mut R) -> Result<Vec<MatmulTiming>> {
    config.validate()?;
    info!(
        rows = config.rows,
        inner = config.inner,
        cols = config.cols,
        runs = config.thread_counts.len(),
        "matrix multiply sweep"
    );

    let a = Matrix::random(config.rows, config.inner, rng);
    let b = Matrix::random(config.inner, config.cols, rng);
    let reference = if config.verify {
        Some(a.multiply(&b)?)
    } else {
        None
    };

    let mut timings = Vec::with_capacity(config.thread_counts.len());
    for &threads in &config.thread_counts {
        let mut c = Matrix::zeros(config.rows, config.cols);

        let start = Instant::now();
        multiply_threaded(&a, &b, &mut c, threads)?;
        let elapsed = start.elapsed();

        let verified = reference.as_ref().map(|expected| *expected == c);
        if verified == Some(false) {
            warn!(threads, "threaded product differs from reference");
        }

        timings.push(MatmulTiming {
            threads,
            elapsed,
            verified,
        });
    }

    Ok(timings)
}
