use std::hint::black_box;

use super::cell::{LockedCounter, RacyCounter};

/// Increments `counter` `iterations` times with no synchronization.
pub fn increment_without_lock(counter: &RacyCounter, iterations: u64) {
    for _ in 0..iterations {
        counter.increment();
    }
}

/// Increments `counter` `iterations` times, taking the lock every time.
pub fn increment_with_lock(counter: &LockedCounter, iterations: u64) {
    for _ in 0..iterations {
        counter.increment();
    }
}

/// Counts locally and flushes into `counter` every `batch_size` increments.
///
/// A final flush adds whatever is left over, so the counter always ends up
/// `iterations` higher. The lock is taken `ceil(iterations / batch_size)`
/// times; the return value is that count.
///
/// # Panics
///
/// Panics if `batch_size` is 0.
pub fn increment_with_batch(counter: &LockedCounter, iterations: u64, batch_size: u64) -> u64 {
    assert!(batch_size > 0, "batch_size must be non-zero");

    let mut local_sum = 0;
    let mut flushes = 0;
    for _ in 0..iterations {
        local_sum += 1;
        if local_sum == batch_size {
            counter.add(local_sum);
            local_sum = 0;
            flushes += 1;
        }
    }

    if local_sum > 0 {
        counter.add(local_sum);
        flushes += 1;
    }
    flushes
}

/// Read, spin for `spin` iterations, then write `read + 1`.
///
/// The spin widens the window between read and write so that another
/// thread almost certainly reads the same value in between.
pub fn increment_with_delay(counter: &RacyCounter, iterations: u64, spin: u64) {
    for _ in 0..iterations {
        let value = counter.read();
        busy_wait(spin);
        counter.write(value + 1);
    }
}

#[inline(never)]
fn busy_wait(spin: u64) {
    for j in 0..spin {
        black_box(j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flush_count() {
        let counter = LockedCounter::new();

        assert_eq!(increment_with_batch(&counter, 100, 10), 10);
        assert_eq!(increment_with_batch(&counter, 105, 10), 11);
        assert_eq!(increment_with_batch(&counter, 3, 10), 1);
        assert_eq!(increment_with_batch(&counter, 0, 10), 0);
        assert_eq!(counter.get(), 208);
    }

    #[test]
    #[should_panic(expected = "batch_size must be non-zero")]
    fn test_batch_zero_panics() {
        increment_with_batch(&LockedCounter::new(), 10, 0);
    }

    #[test]
    fn test_delay_single_thread_is_exact() {
        let counter = RacyCounter::new();
        increment_with_delay(&counter, 50, 100);
        assert_eq!(counter.get(), 50);
    }
}
