//! Engine-level error hierarchy, distinct from wire-level [`crate::NntpError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the Progress Store.
#[derive(Error, Debug)]
pub enum ProgressStoreError {
    #[error("could not open progress store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("progress store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Fatal errors that abort the engine with a non-zero exit code.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    ProgressStore(#[from] ProgressStoreError),

    #[error("another instance is already running (pid file {0})")]
    Locked(PathBuf),

    #[error("processing timed out")]
    Timeout,

    #[error("a worker task panicked")]
    WorkerPanic,

    #[error("fatal connection error: {0}")]
    Connection(#[from] crate::NntpError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
