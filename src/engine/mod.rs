//! Replication engine: progress store, filter lists, worker pool, orchestrator.

mod config;
mod connection;
mod error;
mod filters;
pub mod mbox;
mod orchestrator;
mod outcome;
mod pidlock;
mod pipeline;
mod progress_store;
mod stats;
mod worker;

pub use config::{EngineConfig, Mode, ServerEntry};
pub use connection::{DestConnection, GroupCatalogue, SourceConnection};
pub use error::{EngineError, ProgressStoreError, Result};
pub use filters::FilterLists;
pub use orchestrator::ServerOrchestrator;
pub use outcome::{FetchOutcome, FetchRequest, OutcomeTag, StatusTag};
pub use pidlock::PidLock;
pub use progress_store::ProgressStore;
pub use stats::Stats;
