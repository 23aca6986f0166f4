//! Shared-counter experiments: no lock, lock per increment, batched lock,
//! and the forced read-spin-write race.

use tracing::info;

use super::report::CounterReport;
use super::run_workers;
use crate::config::{BatchConfig, CounterConfig, RaceConfig};
use crate::counter::{
    LockedCounter, RacyCounter, increment_with_batch, increment_with_delay, increment_with_lock,
    increment_without_lock,
};
use crate::error::Result;

/// Every thread increments one racy counter with no synchronization.
pub fn run_unlocked(config: &CounterConfig) -> Result<CounterReport> {
    config.validate()?;
    info!(threads = config.threads, iterations = config.iterations, "unlocked increment");

    let counter = RacyCounter::new();
    let (_, elapsed) = run_workers("unlocked", config.threads, |_| {
        increment_without_lock(&counter, config.iterations)
    })?;

    Ok(CounterReport {
        label: "Result without lock",
        threads: config.threads,
        expected: expected_total(config.threads, config.iterations),
        observed: counter.get(),
        elapsed,
        lock_acquisitions: None,
    })
}

/// Every thread takes the mutex for every increment.
pub fn run_locked(config: &CounterConfig) -> Result<CounterReport> {
    config.validate()?;
    info!(threads = config.threads, iterations = config.iterations, "locked increment");

    let counter = LockedCounter::new();
    let (_, elapsed) = run_workers("locked", config.threads, |_| {
        increment_with_lock(&counter, config.iterations)
    })?;

    let expected = expected_total(config.threads, config.iterations);
    Ok(CounterReport {
        label: "Result with lock",
        threads: config.threads,
        expected,
        observed: counter.get(),
        elapsed,
        lock_acquisitions: Some(expected),
    })
}

/// Runs [`run_unlocked`] and then [`run_locked`] with the same parameters.
pub fn run_counter(config: &CounterConfig) -> Result<Vec<CounterReport>> {
    Ok(vec![run_unlocked(config)?, run_locked(config)?])
}

/// Every thread counts locally and flushes under the lock once per batch.
pub fn run_batched(config: &BatchConfig) -> Result<CounterReport> {
    config.validate()?;
    info!(
        threads = config.threads,
        iterations = config.iterations,
        batch_size = config.batch_size,
        "batched increment"
    );

    let counter = LockedCounter::new();
    let (flushes, elapsed) = run_workers("batched", config.threads, |_| {
        increment_with_batch(&counter, config.iterations, config.batch_size)
    })?;

    Ok(CounterReport {
        label: "Result with batched lock",
        threads: config.threads,
        expected: expected_total(config.threads, config.iterations),
        observed: counter.get(),
        elapsed,
        lock_acquisitions: Some(flushes.iter().sum()),
    })
}

/// Every thread reads the counter, spins, then writes back `read + 1`.
pub fn run_race(config: &RaceConfig) -> Result<CounterReport> {
    config.validate()?;
    info!(
        threads = config.threads,
        iterations = config.iterations,
        spin = config.spin,
        "forced interleaving race"
    );

    let counter = RacyCounter::new();
    let (_, elapsed) = run_workers("race", config.threads, |_| {
        increment_with_delay(&counter, config.iterations, config.spin)
    })?;

    Ok(CounterReport {
        label: "Result",
        threads: config.threads,
        expected: expected_total(config.threads, config.iterations),
        observed: counter.get(),
        elapsed,
        lock_acquisitions: None,
    })
}

fn expected_total(threads: usize, iterations: u64) -> u64 {
    threads as u64 * iterations
}
