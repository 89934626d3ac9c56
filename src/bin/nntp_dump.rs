//! Progress store dump tool, grounded in the legacy `db_dump.py` (§4.9).
//!
//! Usage: `nntp-dump [-a] [-g] <newsdb-path>`
//!
//! With neither flag, dumps both tables. Output is tab-separated
//! `key\tvalue` lines, one record per line, article keys prefixed `a/`
//! and group keys prefixed `l/` to match the legacy flat-dbm convention.

use std::process::ExitCode;

use nntp_rs::engine::ProgressStore;
use sqlx::Row;

fn usage() -> ExitCode {
    eprintln!("usage: nntp-dump [-a] [-g] <newsdb-path>");
    eprintln!("  -a  dump articles only");
    eprintln!("  -g  dump groups only");
    eprintln!("  (no flags) dump both");
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut dump_articles = false;
    let mut dump_groups = false;
    let mut path = None;

    for arg in &args {
        match arg.as_str() {
            "-a" => dump_articles = true,
            "-g" => dump_groups = true,
            other => path = Some(other.to_string()),
        }
    }

    if !dump_articles && !dump_groups {
        dump_articles = true;
        dump_groups = true;
    }

    let Some(path) = path else {
        return usage();
    };

    let store = match ProgressStore::open(&path, true).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("cannot open {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    if dump_groups {
        let rows = match sqlx::query("SELECT group_name, last_id FROM groups")
            .fetch_all(store.pool())
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("query failed: {}", e);
                return ExitCode::FAILURE;
            }
        };
        for row in rows {
            let group: String = row.get("group_name");
            let last_id: i64 = row.get("last_id");
            println!("l/{}\t{}", group, last_id);
        }
    }

    if dump_articles {
        let rows = match sqlx::query("SELECT message_id, timestamp, group_name, status FROM articles")
            .fetch_all(store.pool())
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("query failed: {}", e);
                return ExitCode::FAILURE;
            }
        };
        for row in rows {
            let message_id: String = row.get("message_id");
            let timestamp: i64 = row.get("timestamp");
            let group: String = row.get("group_name");
            let status: String = row.get("status");
            println!("a/{}\t{}\t{}\t{}", message_id, timestamp, group, status);
        }
    }

    ExitCode::SUCCESS
}
