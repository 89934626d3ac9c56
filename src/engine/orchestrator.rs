//! Enumerates the destination group catalogue and drives one pipeline run (§4.5).

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::config::Mode;
use super::connection::{DestConnection, GroupCatalogue, SourceConnection};
use super::error::{EngineError, Result};
use super::filters::FilterLists;
use super::outcome::{FetchOutcome, FetchRequest};
use super::pipeline::GroupPipeline;
use super::progress_store::ProgressStore;
use super::stats::Stats;
use super::worker::Worker;

/// Bounded capacity for the request/outcome channels (§5).
const CHANNEL_CAPACITY: usize = 10_000;

pub struct ServerOrchestrator {
    store: ProgressStore,
    filters: FilterLists,
    stats: Stats,
    max_articles: u64,
    done_list: Option<PathBuf>,
    mode: Mode,
    shutdown: CancellationToken,
}

impl ServerOrchestrator {
    pub fn new(store: ProgressStore, filters: FilterLists, mode: Mode, max_articles: u64, done_list: Option<PathBuf>) -> Self {
        Self {
            store,
            filters,
            stats: Stats::default(),
            max_articles,
            done_list,
            mode,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Runs the full replication pass: enumerates the destination's group
    /// catalogue, applies filter precedence, and drives each accepted group
    /// through the pipeline sequentially while `workers` drain the shared
    /// request channel concurrently. Consumes the orchestrator and returns
    /// the final stats.
    pub async fn run<S, D, C>(
        self,
        mut ref_src: S,
        mut catalogue: C,
        worker_conns: Vec<(S, D)>,
    ) -> Result<Stats>
    where
        S: SourceConnection + 'static,
        D: DestConnection + 'static,
        C: GroupCatalogue,
    {
        if matches!(self.mode, Mode::Mbox) {
            return Err(EngineError::Config(
                "mbox mode is handled by the mbox ingest path, not the orchestrator".into(),
            ));
        }

        let (requests_tx, requests_rx) = mpsc::channel::<FetchRequest>(CHANNEL_CAPACITY);
        let (outcomes_tx, outcomes_rx) = mpsc::channel::<FetchOutcome>(CHANNEL_CAPACITY);
        let shared_requests = Arc::new(Mutex::new(requests_rx));
        let running_workers = Arc::new(AtomicUsize::new(worker_conns.len()));
        self.stats.set_workers(worker_conns.len() as u64);

        let mut handles = Vec::new();
        for (src, dest) in worker_conns {
            let worker = Worker::new(
                src,
                dest,
                self.mode,
                Arc::clone(&shared_requests),
                outcomes_tx.clone(),
                Arc::clone(&running_workers),
                self.shutdown.clone(),
            );
            handles.push(tokio::spawn(worker.run()));
        }
        drop(outcomes_tx);

        let groups = catalogue.list_groups().await?;
        let accepted: Vec<String> = groups
            .into_iter()
            .filter(|g| self.filters.should_process(&g.name))
            .map(|g| g.name)
            .collect();

        info!("orchestrator: {} groups accepted after filtering", accepted.len());

        let mut pipeline = GroupPipeline::new(
            &self.store,
            &self.stats,
            requests_tx,
            outcomes_rx,
            self.max_articles,
            self.done_list.as_deref(),
        );

        for group in &accepted {
            if self.shutdown.is_cancelled() {
                warn!("orchestrator: shutdown requested, stopping before group {}", group);
                break;
            }
            if let Err(e) = pipeline.run_group(group, &mut ref_src).await {
                warn!("orchestrator: group {} failed: {}", group, e);
            }
        }

        drop(pipeline);
        let mut unclean = false;
        for handle in handles {
            match handle.await {
                Ok(true) => {}
                Ok(false) => {
                    warn!("orchestrator: a worker exited uncleanly");
                    unclean = true;
                }
                Err(e) => {
                    warn!("orchestrator: worker task panicked: {}", e);
                    unclean = true;
                }
            }
        }

        info!("orchestrator: run complete — {}", self.stats);
        if unclean {
            return Err(EngineError::WorkerPanic);
        }
        Ok(self.stats)
    }
}
