use std::fmt;
use std::time::Duration;

/// Outcome of one shared-counter experiment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterReport {
    /// Leading text of the printed line, e.g. `"Result with lock"`.
    pub label: &'static str,
    pub threads: usize,
    /// `threads * iterations`: what a race-free run ends with.
    pub expected: u64,
    pub observed: u64,
    pub elapsed: Duration,
    /// Total lock acquisitions, where the experiment counts them.
    pub lock_acquisitions: Option<u64>,
}

impl CounterReport {
    pub fn lost_updates(&self) -> u64 {
        self.expected.saturating_sub(self.observed)
    }

    pub fn is_exact(&self) -> bool {
        self.observed == self.expected
    }
}

impl fmt::Display for CounterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Time taken: {:.6} seconds",
            self.label,
            self.observed,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Timing of the matrix multiply at one thread count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatmulTiming {
    pub threads: usize,
    pub elapsed: Duration,
    /// `Some(true)` if C matched the reference product, `None` if not checked.
    pub verified: Option<bool>,
}

impl fmt::Display for MatmulTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time taken with {} threads: {:.6} seconds.",
            self.threads,
            self.elapsed.as_secs_f64()
        )?;
        match self.verified {
            Some(true) => write!(f, " (verified)"),
            Some(false) => write!(f, " (MISMATCH)"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_line() {
        let report = CounterReport {
            label: "Result with lock",
            threads: 2,
            expected: 2_000_000,
            observed: 2_000_000,
            elapsed: Duration::from_millis(1500),
            lock_acquisitions: Some(2_000_000),
        };
        assert_eq!(
            report.to_string(),
            "Result with lock: 2000000, Time taken: 1.500000 seconds"
        );
        assert!(report.is_exact());
    }

    #[test]
    fn test_lost_updates() {
        let report = CounterReport {
            label: "Result without lock",
            threads: 2,
            expected: 2_000,
            observed: 1_234,
            elapsed: Duration::ZERO,
            lock_acquisitions: None,
        };
        assert_eq!(report.lost_updates(), 766);
        assert!(!report.is_exact());
    }

    #[test]
    fn test_matmul_line() {
        let timing = MatmulTiming {
            threads: 12,
            elapsed: Duration::from_micros(250),
            verified: Some(true),
        };
        assert_eq!(
            timing.to_string(),
            "Time taken with 12 threads: 0.000250 seconds. (verified)"
        );
    }
}
