//! Processes one group end-to-end: enumerate, dedup, fan out, drain (§4.4).

use std::path::Path;

use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::connection::SourceConnection;
use super::error::{EngineError, Result};
use super::outcome::{FetchOutcome, FetchRequest, OutcomeTag};
use super::progress_store::ProgressStore;
use super::stats::Stats;

/// Append-only record of groups this run will not revisit.
const BAD_GROUPS_FILE: &str = "list.BadGroups.txt";

/// Back-pressure threshold from §4.4 step 5: above this many pending dispatches
/// for one group, the drain phase interleaves rather than queuing everything up front.
const DRAIN_INTERLEAVE_THRESHOLD: usize = 10_000;

pub struct GroupPipeline<'a> {
    store: &'a ProgressStore,
    stats: &'a Stats,
    requests: mpsc::Sender<FetchRequest>,
    outcomes: mpsc::Receiver<FetchOutcome>,
    max_articles: u64,
    done_list: Option<&'a Path>,
}

impl<'a> GroupPipeline<'a> {
    pub fn new(
        store: &'a ProgressStore,
        stats: &'a Stats,
        requests: mpsc::Sender<FetchRequest>,
        outcomes: mpsc::Receiver<FetchOutcome>,
        max_articles: u64,
        done_list: Option<&'a Path>,
    ) -> Self {
        Self {
            store,
            stats,
            requests,
            outcomes,
            max_articles,
            done_list,
        }
    }

    /// Runs the pipeline for `group` against the engine's reference source connection.
    pub async fn run_group<S: SourceConnection>(&mut self, group: &str, src: &mut S) -> Result<()> {
        let info = match src.select_group(group).await {
            Ok(info) => info,
            Err(e) => {
                warn!("GROUP {} failed, marking bad: {}", group, e);
                self.append_bad_group(group).await;
                return Ok(());
            }
        };

        let (myfirst, mylast, mycount) = self
            .store
            .get_group_range(group, info.first, info.last, self.max_articles)
            .await?;

        if mycount == 0 {
            self.append_done(group).await;
            return Ok(());
        }

        let range = format!("{}-{}", myfirst, mylast);
        let entries = src.xhdr_message_ids(&range).await?;

        if entries.len() as u64 != mycount {
            warn!(
                "group {}: XHDR returned {} entries, expected {} (server holes)",
                group,
                entries.len(),
                mycount
            );
        }

        let mut pending_local = Vec::new();
        let mut dispatched = 0usize;
        let mut drained = 0u64;
        for entry in &entries {
            let message_id = entry.value.clone();
            if self.store.has_article(&message_id).await? {
                pending_local.push(FetchOutcome {
                    tag: OutcomeTag::SeenInDb,
                    message_id,
                    group: group.to_string(),
                    article_number: entry.article_number,
                });
            } else {
                let request = FetchRequest {
                    group: group.to_string(),
                    article_number: entry.article_number,
                    message_id,
                };
                self.requests
                    .send(request)
                    .await
                    .map_err(|_| EngineError::WorkerPanic)?;
                dispatched += 1;
            }

            if dispatched >= DRAIN_INTERLEAVE_THRESHOLD {
                self.drain_one().await?;
                dispatched -= 1;
                drained += 1;
            }
        }

        let target = entries.len() as u64;
        let mut processed = drained;
        for outcome in pending_local {
            self.apply_outcome(&outcome).await?;
            processed += 1;
        }
        while processed < target {
            let outcome = self.outcomes.recv().await.ok_or(EngineError::WorkerPanic)?;
            self.apply_outcome(&outcome).await?;
            processed += 1;
        }

        info!("group {}: processed {} articles", group, processed);
        self.append_done(group).await;
        Ok(())
    }

    async fn drain_one(&mut self) -> Result<()> {
        if let Some(outcome) = self.outcomes.recv().await {
            self.apply_outcome(&outcome).await?;
        }
        Ok(())
    }

    /// Outcome Processor (§4.4.1).
    async fn apply_outcome(&self, outcome: &FetchOutcome) -> Result<()> {
        self.stats.record(outcome.tag);
        if let Some(status) = outcome.tag.status() {
            self.store
                .mark_article(&outcome.message_id, &outcome.group, status, now())
                .await?;
        }
        if outcome.tag.advances_cursor() {
            self.store.set_last_id(&outcome.group, outcome.article_number).await?;
        }
        Ok(())
    }

    async fn append_done(&self, group: &str) {
        if let Some(path) = self.done_list {
            append_line(path, group).await;
        }
    }

    async fn append_bad_group(&self, group: &str) {
        append_line(Path::new(BAD_GROUPS_FILE), group).await;
    }
}

async fn append_line(path: &Path, line: &str) {
    let result = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await;
    match result {
        Ok(mut file) => {
            if let Err(e) = file.write_all(format!("{line}\n").as_bytes()).await {
                warn!("failed to append to {}: {}", path.display(), e);
            }
        }
        Err(e) => warn!("failed to open {}: {}", path.display(), e),
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
