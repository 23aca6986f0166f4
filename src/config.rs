//! Parameters for each experiment.
//!
//! `Default` gives the numbers the benchmarks are normally run with. The
//! binary overrides individual fields from the command line and calls
//! `validate()` before anything is spawned.

use crate::error::{ContentionError, Result};

/// Matrix multiply sweep: A is `rows × inner`, B is `inner × cols`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatmulConfig {
    pub rows: usize,
    pub inner: usize,
    pub cols: usize,
    pub thread_counts: Vec<usize>,
    /// Compare each threaded result against the single-threaded product.
    pub verify: bool,
}

impl MatmulConfig {
    pub const DEFAULT_ROWS: usize = 120;
    pub const DEFAULT_INNER: usize = 100;
    pub const DEFAULT_COLS: usize = 120;

    /// The default sweep for a `rows × cols` output: a few small counts,
    /// a few large ones, and finally one thread per output cell.
    pub fn default_thread_counts(rows: usize, cols: usize) -> Vec<usize> {
        vec![1, 10, 12, 100, 500, 1000, 10_000, rows * cols]
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.inner == 0 || self.cols == 0 {
            return Err(ContentionError::EmptyMatrix);
        }
        if self.thread_counts.contains(&0) {
            return Err(ContentionError::ZeroThreads);
        }
        Ok(())
    }
}

impl Default for MatmulConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            inner: Self::DEFAULT_INNER,
            cols: Self::DEFAULT_COLS,
            thread_counts: Self::default_thread_counts(Self::DEFAULT_ROWS, Self::DEFAULT_COLS),
            verify: false,
        }
    }
}

/// Unsynchronized vs. locked increments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    pub iterations: u64,
    pub threads: usize,
}

impl CounterConfig {
    pub fn validate(&self) -> Result<()> {
        validate_threads(self.threads)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            threads: 2,
        }
    }
}

/// Locked increments flushed in batches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    pub iterations: u64,
    pub batch_size: u64,
    pub threads: usize,
}

impl BatchConfig {
    pub fn validate(&self) -> Result<()> {
        validate_threads(self.threads)?;
        if self.batch_size == 0 {
            return Err(ContentionError::ZeroBatchSize);
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            batch_size: 10_000,
            threads: 2,
        }
    }
}

/// Read, busy-wait, write race.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceConfig {
    pub iterations: u64,
    /// Busy-wait iterations between the read and the write.
    pub spin: u64,
    pub threads: usize,
}

impl RaceConfig {
    pub fn validate(&self) -> Result<()> {
        validate_threads(self.threads)
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000,
            spin: 1_000_000,
            threads: 2,
        }
    }
}

fn validate_threads(threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(ContentionError::ZeroThreads);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep_ends_with_one_thread_per_cell() {
        let config = MatmulConfig::default();
        assert_eq!(config.thread_counts.last(), Some(&(120 * 120)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let matmul = MatmulConfig {
            inner: 0,
            ..MatmulConfig::default()
        };
        assert!(matches!(matmul.validate(), Err(ContentionError::EmptyMatrix)));

        let matmul = MatmulConfig {
            thread_counts: vec![4, 0],
            ..MatmulConfig::default()
        };
        assert!(matches!(matmul.validate(), Err(ContentionError::ZeroThreads)));

        let batch = BatchConfig {
            batch_size: 0,
            ..BatchConfig::default()
        };
        assert!(matches!(batch.validate(), Err(ContentionError::ZeroBatchSize)));

        let race = RaceConfig {
            threads: 0,
            ..RaceConfig::default()
        };
        assert!(matches!(race.validate(), Err(ContentionError::ZeroThreads)));
    }
}
