//! Long-lived consumer that performs destination writes (§4.3).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::client::{IhaveOffer, TakeThisOutcome};

use super::config::Mode;
use super::connection::{is_not_found, whitelist_post_text, DestConnection, SourceConnection};
use super::outcome::{FetchOutcome, FetchRequest, OutcomeTag};

/// Appends a per-article salvage record to `bad.<group>` so a failed transfer
/// can be retried offline later (§6, §7 fatal-connection action).
async fn write_salvage_record(group: &str, article_number: u64, message_id: &str) {
    let path = format!("bad.{group}");
    let pgrp = group.replace('.', "/");
    let line = format!(
        "group={group} num={article_number} messid={message_id} pgrp={pgrp}/.art{article_number}\n"
    );
    let result = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await;
    match result {
        Ok(mut file) => {
            if let Err(e) = file.write_all(line.as_bytes()).await {
                warn!("failed to append salvage record to {}: {}", path, e);
            }
        }
        Err(e) => warn!("failed to open salvage file {}: {}", path, e),
    }
}

/// The request channel is conceptually single-producer/multi-consumer (§5), but
/// `tokio::sync::mpsc` only gives a single-consumer `Receiver`; every worker shares
/// one behind a mutex instead of owning a private one.
pub type SharedRequests = Arc<Mutex<mpsc::Receiver<FetchRequest>>>;

pub struct Worker<S, D> {
    src: S,
    dest: D,
    mode: Mode,
    current_group: Option<String>,
    requests: SharedRequests,
    outcomes: mpsc::Sender<FetchOutcome>,
    running_workers: Arc<AtomicUsize>,
    shutdown: CancellationToken,
}

impl<S, D> Worker<S, D>
where
    S: SourceConnection,
    D: DestConnection,
{
    pub fn new(
        src: S,
        dest: D,
        mode: Mode,
        requests: SharedRequests,
        outcomes: mpsc::Sender<FetchOutcome>,
        running_workers: Arc<AtomicUsize>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            src,
            dest,
            mode,
            current_group: None,
            requests,
            outcomes,
            running_workers,
            shutdown,
        }
    }

    /// Runs until the request channel closes or shutdown is requested.
    ///
    /// Blocking on `recv()` rather than polling with a sleep means an idle
    /// worker costs nothing (§8 invariant 9) without any explicit back-off.
    ///
    /// Returns `true` if the worker exited cleanly (shutdown, or the request
    /// channel closed), `false` if it exited early because of a connection
    /// error — callers treat the latter as an unclean termination (§6).
    pub async fn run(mut self) -> bool {
        let clean = loop {
            let request = tokio::select! {
                _ = self.shutdown.cancelled() => break true,
                request = async { self.requests.lock().await.recv().await } => request,
            };

            let Some(request) = request else { break true };

            if self.current_group.as_deref() != Some(request.group.as_str()) {
                if let Err(e) = self.src.select_group(&request.group).await {
                    warn!("worker: GROUP {} failed, exiting: {}", request.group, e);
                    write_salvage_record(&request.group, request.article_number, &request.message_id).await;
                    self.emit_error(request).await;
                    break false;
                }
                self.current_group = Some(request.group.clone());
            }

            let outcome = self.copy_article(&request).await;
            if self.outcomes.send(outcome).await.is_err() {
                break true;
            }
        };

        let remaining = self.running_workers.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("worker exiting, {} workers remaining", remaining);

        if remaining == 0 {
            self.drain_remaining_requests().await;
        }

        clean
    }

    /// Reports a request this worker consumed but could not complete, so the
    /// pipeline's outcome count still matches the number of requests it dispatched.
    async fn emit_error(&mut self, request: FetchRequest) {
        let outcome = FetchOutcome {
            tag: OutcomeTag::Error,
            message_id: request.message_id,
            group: request.group,
            article_number: request.article_number,
        };
        let _ = self.outcomes.send(outcome).await;
    }

    /// Last worker out: every other worker has already exited and will never
    /// come back for whatever is still queued, so this worker drains it and
    /// reports each as an error to unblock the pipeline (§4.3, §5).
    async fn drain_remaining_requests(&mut self) {
        loop {
            let request = {
                let mut guard = self.requests.lock().await;
                match guard.try_recv() {
                    Ok(request) => request,
                    Err(_) => break,
                }
            };
            self.emit_error(request).await;
        }
    }

    /// §4.3.1 mode dispatch.
    async fn copy_article(&mut self, request: &FetchRequest) -> FetchOutcome {
        let tag = match self.mode {
            Mode::Reader | Mode::Reader1 => self.copy_reader(request).await,
            Mode::Ihave => self.copy_ihave(request).await,
            Mode::Ihave2 => self.copy_ihave2(request).await,
            Mode::Post => self.copy_post(request).await,
            Mode::Mbox => unreachable!("mbox mode never reaches the worker pool"),
        };

        FetchOutcome {
            tag,
            message_id: request.message_id.clone(),
            group: request.group.clone(),
            article_number: request.article_number,
        }
    }

    async fn copy_reader(&mut self, request: &FetchRequest) -> OutcomeTag {
        match self.src.fetch_article_lines(request.article_number).await {
            Ok(_lines) => OutcomeTag::Success,
            Err(e) if is_not_found(&e) => OutcomeTag::NotFound,
            Err(e) => {
                warn!("reader mode: ARTICLE {} failed: {}", request.article_number, e);
                write_salvage_record(&request.group, request.article_number, &request.message_id).await;
                OutcomeTag::Error
            }
        }
    }

    async fn copy_ihave(&mut self, request: &FetchRequest) -> OutcomeTag {
        match self.offer(&request.message_id).await {
            Offer::Wanted => self.fetch_then_send(request).await,
            Offer::Duplicate => OutcomeTag::Duplicate,
            Offer::RetryLater => OutcomeTag::Retry,
            Offer::Rejected => OutcomeTag::Unwanted,
            Offer::Error(tag) => tag,
        }
    }

    async fn copy_ihave2(&mut self, request: &FetchRequest) -> OutcomeTag {
        let lines = match self.src.fetch_article_lines(request.article_number).await {
            Ok(lines) => lines,
            Err(e) if is_not_found(&e) => return OutcomeTag::NotFound,
            Err(e) => {
                warn!("ihave2 mode: ARTICLE {} failed: {}", request.article_number, e);
                write_salvage_record(&request.group, request.article_number, &request.message_id).await;
                return OutcomeTag::Error;
            }
        };

        match self.offer(&request.message_id).await {
            Offer::Wanted => self.send_body(&lines).await,
            Offer::Duplicate => OutcomeTag::Duplicate,
            Offer::RetryLater => OutcomeTag::Retry,
            Offer::Rejected => OutcomeTag::Unwanted,
            Offer::Error(tag) => tag,
        }
    }

    async fn copy_post(&mut self, request: &FetchRequest) -> OutcomeTag {
        let lines = match self.src.fetch_article_lines(request.article_number).await {
            Ok(lines) => lines,
            Err(e) if is_not_found(&e) => return OutcomeTag::NotFound,
            Err(e) => {
                warn!("post mode: ARTICLE {} failed: {}", request.article_number, e);
                write_salvage_record(&request.group, request.article_number, &request.message_id).await;
                return OutcomeTag::Error;
            }
        };

        let text = whitelist_post_text(&lines);
        match self.dest.post(&text).await {
            Ok(()) => OutcomeTag::Success,
            Err(e) => {
                warn!("post mode: POST failed: {}", e);
                write_salvage_record(&request.group, request.article_number, &request.message_id).await;
                OutcomeTag::Error
            }
        }
    }

    async fn offer(&mut self, message_id: &str) -> Offer {
        match self.dest.ihave_offer(message_id).await {
            Ok(IhaveOffer::Wanted) => Offer::Wanted,
            Ok(IhaveOffer::Duplicate) => Offer::Duplicate,
            Ok(IhaveOffer::RetryLater) => Offer::RetryLater,
            Ok(IhaveOffer::Rejected) => Offer::Rejected,
            Err(e) => {
                warn!("IHAVE failed: {}", e);
                Offer::Error(OutcomeTag::Error)
            }
        }
    }

    /// Fetches from the source after an accepted `ihave` offer; cancels the
    /// transfer cleanly if the source can't supply the body (§4.3.1 step 6).
    async fn fetch_then_send(&mut self, request: &FetchRequest) -> OutcomeTag {
        match self.src.fetch_article_lines(request.article_number).await {
            Ok(lines) => self.send_body(&lines).await,
            Err(e) if is_not_found(&e) => {
                let _ = self.dest.cancel_transfer().await;
                OutcomeTag::NotFound
            }
            Err(e) => {
                warn!("ihave mode: ARTICLE {} failed after accept: {}", request.article_number, e);
                let _ = self.dest.cancel_transfer().await;
                write_salvage_record(&request.group, request.article_number, &request.message_id).await;
                OutcomeTag::Error
            }
        }
    }

    async fn send_body(&mut self, lines: &[String]) -> OutcomeTag {
        match self.dest.take_this(lines).await {
            Ok(TakeThisOutcome::Accepted) => OutcomeTag::Success,
            Ok(TakeThisOutcome::RetryLater(_)) => OutcomeTag::Retry,
            Ok(TakeThisOutcome::Rejected(_)) => OutcomeTag::Unwanted,
            Err(e) => {
                warn!("TAKETHIS failed: {}", e);
                OutcomeTag::Error
            }
        }
    }
}

enum Offer {
    Wanted,
    Duplicate,
    RetryLater,
    Rejected,
    Error(OutcomeTag),
}
