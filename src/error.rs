//! Error type shared by every experiment.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentionError>;

#[derive(Debug, Error)]
pub enum ContentionError {
    #[error("thread count must be at least 1")]
    ZeroThreads,

    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    #[error("matrix dimensions must be non-zero")]
    EmptyMatrix,

    #[error("inner dimensions disagree: A has {left} columns, B has {right} rows")]
    DimensionMismatch { left: usize, right: usize },

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),

    #[error("worker thread panicked")]
    WorkerPanicked,
}
