//! Progress store load tool, grounded in the legacy `db_load.py` (§4.9).
//!
//! Usage: `nntp-load <newsdb-path>`
//!
//! Reads tab-separated `key\tvalue` lines from stdin (as produced by
//! `nntp-dump`) and upserts them back into the two tables, dispatching on
//! the `a/` / `l/` key prefix the same way the legacy tool's key shape did.

use std::io::{self, BufRead};
use std::process::ExitCode;

use nntp_rs::engine::ProgressStore;
use tracing::warn;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: nntp-load <newsdb-path>");
        return ExitCode::FAILURE;
    };

    let store = match ProgressStore::open(&path, true).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("cannot open {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut loaded = 0u64;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("read error: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.is_empty() {
            continue;
        }

        if let Err(e) = load_line(&store, &line).await {
            warn!("skipping malformed line {:?}: {}", line, e);
            continue;
        }
        loaded += 1;
    }

    println!("loaded {} records", loaded);
    ExitCode::SUCCESS
}

async fn load_line(store: &ProgressStore, line: &str) -> Result<(), String> {
    let mut fields = line.splitn(2, '\t');
    let key = fields.next().ok_or("missing key")?;
    let rest = fields.next().ok_or("missing value")?;

    if let Some(group) = key.strip_prefix("l/") {
        let last_id: u64 = rest.parse().map_err(|e| format!("bad last_id: {e}"))?;
        store
            .set_last_id(group, last_id)
            .await
            .map_err(|e| e.to_string())?;
        return Ok(());
    }

    if let Some(message_id) = key.strip_prefix("a/") {
        let mut value_fields = rest.splitn(3, '\t');
        let timestamp: i64 = value_fields
            .next()
            .ok_or("missing timestamp")?
            .parse()
            .map_err(|e| format!("bad timestamp: {e}"))?;
        let group = value_fields.next().ok_or("missing group")?;
        let status_str = value_fields.next().ok_or("missing status")?;
        let status = parse_status(status_str)?;
        store
            .mark_article(message_id, group, status, timestamp)
            .await
            .map_err(|e| e.to_string())?;
        return Ok(());
    }

    Err(format!("unrecognized key prefix in {:?}", key))
}

fn parse_status(s: &str) -> Result<nntp_rs::engine::StatusTag, String> {
    Ok(match s {
        "suc" => nntp_rs::engine::StatusTag::Success,
        "dup" => nntp_rs::engine::StatusTag::Duplicate,
        "unw" => nntp_rs::engine::StatusTag::Unwanted,
        "ret" => nntp_rs::engine::StatusTag::Retry,
        "nof" => nntp_rs::engine::StatusTag::NotFound,
        "err" => nntp_rs::engine::StatusTag::Error,
        other => return Err(format!("unrecognized status tag '{other}'")),
    })
}
