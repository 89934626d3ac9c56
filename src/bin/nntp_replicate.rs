//! Replication engine entry point (§4.8).
//!
//! Usage: `nntp-replicate <config.ini>`

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use nntp_rs::engine::{
    EngineConfig, EngineError, FilterLists, Mode, PidLock, ProgressStore, Result, ServerEntry,
    ServerOrchestrator,
};
use nntp_rs::{NntpClient, ServerConfig};
use tokio::time::timeout;
use tracing::{error, info};

/// Startup alarm covering connection setup (§5).
const STARTUP_TIMEOUT: Duration = Duration::from_secs(120);

/// Processing alarm covering the whole copy phase (§5).
const PROCESSING_TIMEOUT: Duration = Duration::from_secs(86_400);

fn transport_config(entry: &ServerEntry) -> ServerConfig {
    ServerConfig::new(
        entry.host.clone(),
        entry.port,
        entry.port == 563,
        entry.username.clone().unwrap_or_default(),
        entry.password.clone().unwrap_or_default(),
    )
}

async fn dial(entry: &ServerEntry) -> Result<NntpClient> {
    let config = Arc::new(transport_config(entry));
    let mut client = NntpClient::connect(config).await?;
    if entry.username.is_some() {
        client.authenticate().await?;
    }
    Ok(client)
}

async fn run(config: &EngineConfig) -> Result<()> {
    let filters = FilterLists::load(config)?;
    let store = ProgressStore::open(&config.newsdb, config.should_mark_articles).await?;

    if matches!(config.mode, Mode::Mbox) {
        let path = config
            .mbox_path
            .as_ref()
            .ok_or_else(|| EngineError::Config("mbox mode requires misc.mboxPath".into()))?;
        let count = nntp_rs::engine::mbox::count_messages(path).await?;
        info!("mbox {}: {} messages", path.display(), count);
        return Ok(());
    }

    let orchestrator = ServerOrchestrator::new(store, filters, config.mode, config.max_articles, config.done_list.clone());

    let dial_all = async {
        let ref_src = dial(&config.source).await?;
        let catalogue = dial(&config.destination).await?;
        let mut worker_conns = Vec::with_capacity(config.workers);
        for _ in 0..config.workers {
            let src = dial(&config.source).await?;
            let dest = dial(&config.destination).await?;
            worker_conns.push((src, dest));
        }
        Ok::<_, EngineError>((ref_src, catalogue, worker_conns))
    };

    let (ref_src, catalogue, worker_conns) = timeout(STARTUP_TIMEOUT, dial_all)
        .await
        .map_err(|_| EngineError::Timeout)??;

    let stats = timeout(
        PROCESSING_TIMEOUT,
        orchestrator.run(ref_src, catalogue, worker_conns),
    )
    .await
    .map_err(|_| EngineError::Timeout)??;

    info!("final stats: {}", stats);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: nntp-replicate <config.ini>");
            return ExitCode::FAILURE;
        }
    };

    let config = match EngineConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _lock = match PidLock::acquire(&config.pidfile) {
        Ok(lock) => lock,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("replication run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
