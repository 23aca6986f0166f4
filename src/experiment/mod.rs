//! One function per scenario.
//!
//! Every experiment spawns its workers on scoped OS threads, blocks until
//! they are all joined, and returns a report whose `Display` impl is the
//! line the binary prints. Timing covers spawn through the last join.

pub mod counters;
pub mod matmul;
pub mod report;

pub use counters::{run_batched, run_counter, run_locked, run_race, run_unlocked};
pub use matmul::run_matmul;
pub use report::{CounterReport, MatmulTiming};

use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{ContentionError, Result};

/// Runs `work(tid)` on `threads` named threads and joins them all.
///
/// Returns each worker's result in thread order and the wall-clock time
/// from before the first spawn to after the last join.
pub(crate) fn run_workers<T, F>(name: &str, threads: usize, work: F) -> Result<(Vec<T>, Duration)>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    if threads == 0 {
        return Err(ContentionError::ZeroThreads);
    }

    let work = &work;
    let start = Instant::now();
    let results = thread::scope(|s| -> Result<Vec<T>> {
        let mut handles = Vec::with_capacity(threads);
        for tid in 0..threads {
            debug!(experiment = name, tid, "spawning worker");
            let handle = thread::Builder::new()
                .name(format!("{name}-{tid}"))
                .spawn_scoped(s, move || work(tid))?;
            handles.push(handle);
        }

        let joined: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
        joined
            .into_iter()
            .map(|r| r.map_err(|_| ContentionError::WorkerPanicked))
            .collect()
    })?;

    Ok((results, start.elapsed()))
}
