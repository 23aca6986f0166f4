use contention::counter::{
    LockedCounter, RacyCounter, increment_with_batch, increment_with_lock, increment_without_lock,
};
use contention::matrix::Matrix;
use contention::multiply_threaded;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;

const ITERATIONS: u64 = 100_000;
const THREADS: usize = 2;

fn bench_matmul_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul_120x100x120");
    let mut rng = StdRng::seed_from_u64(0);
    let a = Matrix::random(120, 100, &mut rng);
    let b = Matrix::random(100, 120, &mut rng);

    for threads in [1, 4, 12, 120, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |bench, &t| {
            let mut out = Matrix::zeros(120, 120);
            bench.iter(|| multiply_threaded(black_box(&a), black_box(&b), &mut out, t).unwrap());
        });
    }
    group.finish();
}

fn bench_counters(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_2x100k");

    group.bench_function("without_lock", |bench| {
        bench.iter(|| {
            let counter = RacyCounter::new();
            thread::scope(|s| {
                for _ in 0..THREADS {
                    s.spawn(|| increment_without_lock(&counter, ITERATIONS));
                }
            });
            black_box(counter.get())
        });
    });

    group.bench_function("with_lock", |bench| {
        bench.iter(|| {
            let counter = LockedCounter::new();
            thread::scope(|s| {
                for _ in 0..THREADS {
                    s.spawn(|| increment_with_lock(&counter, ITERATIONS));
                }
            });
            black_box(counter.get())
        });
    });

    for batch_size in [10, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("batched", batch_size),
            &batch_size,
            |bench, &size| {
                bench.iter(|| {
                    let counter = LockedCounter::new();
                    thread::scope(|s| {
                        for _ in 0..THREADS {
                            s.spawn(|| increment_with_batch(&counter, ITERATIONS, size));
                        }
                    });
                    black_box(counter.get())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_matmul_threads, bench_counters);
criterion_main!(benches);
