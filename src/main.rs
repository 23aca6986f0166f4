//! Benchmark runner for the contention experiments.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contention::config::{BatchConfig, CounterConfig, MatmulConfig, RaceConfig};
use contention::experiment::{CounterReport, run_batched, run_counter, run_matmul, run_race};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(author, version, about = "Thread and lock contention micro-benchmarks")]
struct Cli {
    /// Seed for the random matrices (fresh entropy when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Matrix multiply at a sweep of thread counts
    Matmul(MatmulArgs),
    /// Shared counter without and with a lock
    Counter(CounterArgs),
    /// Shared counter with batched locked flushes
    Batched(BatchedArgs),
    /// Read, busy-wait, write race between threads
    Race(RaceArgs),
    /// Every experiment with default parameters
    All,
}

#[derive(Debug, Args)]
struct MatmulArgs {
    /// Rows of A and C
    #[arg(long, default_value_t = MatmulConfig::DEFAULT_ROWS)]
    rows: usize,

    /// Columns of A, rows of B
    #[arg(long, default_value_t = MatmulConfig::DEFAULT_INNER)]
    inner: usize,

    /// Columns of B and C
    #[arg(long, default_value_t = MatmulConfig::DEFAULT_COLS)]
    cols: usize,

    /// Thread counts to time (repeatable; default sweep ends at rows*cols)
    #[arg(long = "threads")]
    threads: Vec<usize>,

    /// Check every result against the single-threaded product
    #[arg(long)]
    verify: bool,
}

#[derive(Debug, Args)]
struct CounterArgs {
    /// Increments per thread
    #[arg(long, default_value_t = CounterConfig::default().iterations)]
    iterations: u64,

    #[arg(long, default_value_t = CounterConfig::default().threads)]
    threads: usize,
}

#[derive(Debug, Args)]
struct BatchedArgs {
    /// Increments per thread
    #[arg(long, default_value_t = BatchConfig::default().iterations)]
    iterations: u64,

    /// Local increments between locked flushes
    #[arg(long, default_value_t = BatchConfig::default().batch_size)]
    batch_size: u64,

    #[arg(long, default_value_t = BatchConfig::default().threads)]
    threads: usize,
}

#[derive(Debug, Args)]
struct RaceArgs {
    /// Increments per thread
    #[arg(long, default_value_t = RaceConfig::default().iterations)]
    iterations: u64,

    /// Busy-wait iterations between read and write
    #[arg(long, default_value_t = RaceConfig::default().spin)]
    spin: u64,

    #[arg(long, default_value_t = RaceConfig::default().threads)]
    threads: usize,
}

impl From<MatmulArgs> for MatmulConfig {
    fn from(args: MatmulArgs) -> Self {
        let thread_counts = if args.threads.is_empty() {
            MatmulConfig::default_thread_counts(args.rows, args.cols)
        } else {
            args.threads
        };
        MatmulConfig {
            rows: args.rows,
            inner: args.inner,
            cols: args.cols,
            thread_counts,
            verify: args.verify,
        }
    }
}

impl From<CounterArgs> for CounterConfig {
    fn from(args: CounterArgs) -> Self {
        CounterConfig {
            iterations: args.iterations,
            threads: args.threads,
        }
    }
}

impl From<BatchedArgs> for BatchConfig {
    fn from(args: BatchedArgs) -> Self {
        BatchConfig {
            iterations: args.iterations,
            batch_size: args.batch_size,
            threads: args.threads,
        }
    }
}

impl From<RaceArgs> for RaceConfig {
    fn from(args: RaceArgs) -> Self {
        RaceConfig {
            iterations: args.iterations,
            spin: args.spin,
            threads: args.threads,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        // With no subcommand only the race runs.
        None => race(&RaceConfig::default())?,
        Some(Command::Matmul(args)) => matmul(&args.into(), &mut rng)?,
        Some(Command::Counter(args)) => counter(&args.into())?,
        Some(Command::Batched(args)) => batched(&args.into())?,
        Some(Command::Race(args)) => race(&args.into())?,
        Some(Command::All) => {
            matmul(&MatmulConfig::default(), &mut rng)?;
            counter(&CounterConfig::default())?;
            batched(&BatchConfig::default())?;
            race(&RaceConfig::default())?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn matmul(config: &MatmulConfig, rng: &mut StdRng) -> Result<()> {
    println!(
        "=== Matrix multiply: {}x{} * {}x{} ===",
        config.rows, config.inner, config.inner, config.cols
    );
    let timings = run_matmul(config, rng).context("matrix multiply experiment failed")?;
    for timing in &timings {
        println!("{timing}");
    }
    Ok(())
}

fn counter(config: &CounterConfig) -> Result<()> {
    let reports = run_counter(config).context("counter experiment failed")?;
    for report in &reports {
        print_report(report);
    }
    Ok(())
}

fn batched(config: &BatchConfig) -> Result<()> {
    let report = run_batched(config).context("batched counter experiment failed")?;
    print_report(&report);
    Ok(())
}

fn race(config: &RaceConfig) -> Result<()> {
    let report = run_race(config).context("race experiment failed")?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &CounterReport) {
    println!("{report}");
    info!(
        label = report.label,
        expected = report.expected,
        observed = report.observed,
        lost = report.lost_updates(),
        lock_acquisitions = ?report.lock_acquisitions,
        "counter experiment finished"
    );
}
