//! mbox ingest stub (§4.10, Design Notes open question 2).
//!
//! Counts messages in an mbox file by splitting on `From ` envelope lines.
//! Does not mark articles, advance cursors, or transmit anything — this is a
//! local validation pass over an offline mailbox dump, not a replication path.

use std::path::Path;

use tokio::fs;

use super::error::Result;

pub async fn count_messages(mbox_path: impl AsRef<Path>) -> Result<u64> {
    let contents = fs::read_to_string(mbox_path).await?;
    Ok(contents
        .lines()
        .filter(|line| line.starts_with("From "))
        .count() as u64)
}
