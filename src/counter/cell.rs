use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Counter whose increment is a non-atomic read-modify-write.
///
/// `load` and `store` are each atomic, the pair is not. Two threads that
/// both load the same value both store `value + 1`, and one update is lost.
#[derive(Debug, Default)]
pub struct RacyCounter {
    value: AtomicU64,
}

impl RacyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn read(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write(&self, value: u64) {
        self.value.store(value, Ordering::Relaxed);
    }

    #[inline]
    pub fn increment(&self) {
        let current = self.read();
        self.write(current + 1);
    }

    pub fn get(&self) -> u64 {
        self.read()
    }
}

/// Counter protected by a `std::sync::Mutex`.
#[derive(Debug, Default)]
pub struct LockedCounter {
    value: Mutex<u64>,
}

impl LockedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking holder cannot leave a u64 half-written.
    fn lock(&self) -> MutexGuard<'_, u64> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// One lock acquisition per call.
    #[inline]
    pub fn increment(&self) {
        *self.lock() += 1;
    }

    /// Adds `amount` under a single lock acquisition.
    #[inline]
    pub fn add(&self, amount: u64) {
        *self.lock() += amount;
    }

    pub fn get(&self) -> u64 {
        *self.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_racy_counter_single_thread() {
        let counter = RacyCounter::new();
        for _ in 0..10 {
            counter.increment();
        }
        assert_eq!(counter.get(), 10);
    }

    #[test]
    fn test_locked_counter_add() {
        let counter = LockedCounter::new();
        counter.increment();
        counter.add(41);
        assert_eq!(counter.get(), 42);
    }

    fn hold_and_panic(counter: &LockedCounter) {
        let _guard = counter.lock();
        panic!("poison the lock");
    }

    #[test]
    fn test_locked_counter_survives_poison() {
        let counter = LockedCounter::new();
        counter.add(5);

        let joined = std::thread::scope(|s| s.spawn(|| hold_and_panic(&counter)).join());
        assert!(joined.is_err());

        counter.increment();
        assert_eq!(counter.get(), 6);
    }
}
