//! Raw-body transfer primitives for server-to-server article replication.
//!
//! Unlike [`posting`](super::posting), which takes pre-serialized article text,
//! these methods transfer a body that was fetched verbatim from another server
//! as a line vector (already dot-unstuffed by response parsing) and re-applies
//! dot-stuffing on the way out. They exist for feeder-style replication where the
//! body is opaque bytes, not something this process authored.

use crate::commands;
use crate::response::codes;
use crate::{NntpError, Result};
use tracing::debug;

use super::NntpClient;

/// Outcome of offering a Message-ID via `IHAVE` (RFC 3977 §6.3.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IhaveOffer {
    /// 335 - server wants the article; caller should follow with [`NntpClient::take_this`].
    Wanted,
    /// 435 - server already has this Message-ID.
    Duplicate,
    /// 436 - transient failure; caller should retry later.
    RetryLater,
    /// Anything else - permanent rejection.
    Rejected,
}

/// Outcome of streaming a body via [`NntpClient::take_this`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TakeThisOutcome {
    /// 235 - article accepted.
    Accepted,
    /// 436 - transient failure; caller should retry later.
    RetryLater(String),
    /// 437 - permanent rejection.
    Rejected(String),
}

impl NntpClient {
    /// Offer a Message-ID to this connection via `IHAVE`, without sending a body.
    ///
    /// Call [`take_this`](Self::take_this) next if the result is
    /// [`IhaveOffer::Wanted`]; otherwise the exchange is complete.
    pub async fn ihave_offer(&mut self, message_id: &str) -> Result<IhaveOffer> {
        debug!("IHAVE offer: {}", message_id);

        let cmd = commands::ihave(message_id);
        self.send_command(&cmd).await?;
        let response = self.read_response().await?;

        Ok(match response.code {
            codes::SEND_ARTICLE_TRANSFER => IhaveOffer::Wanted,
            codes::ARTICLE_NOT_WANTED => IhaveOffer::Duplicate,
            codes::TRANSFER_NOT_POSSIBLE => IhaveOffer::RetryLater,
            _ => IhaveOffer::Rejected,
        })
    }

    /// Stream a raw, already dot-unstuffed body following a [`Wanted`](IhaveOffer::Wanted)
    /// `IHAVE` offer, re-applying dot-stuffing and the terminating `.` line.
    pub async fn take_this(&mut self, body_lines: &[String]) -> Result<TakeThisOutcome> {
        debug!("TAKETHIS: streaming {} body lines", body_lines.len());

        let mut buf = String::with_capacity(body_lines.iter().map(|l| l.len() + 2).sum());
        for line in body_lines {
            if line.starts_with('.') {
                buf.push('.');
            }
            buf.push_str(line);
            buf.push_str("\r\n");
        }
        buf.push_str(".\r\n");

        self.send_command(&buf).await?;
        let response = self.read_response().await?;

        match response.code {
            codes::ARTICLE_TRANSFERRED => Ok(TakeThisOutcome::Accepted),
            codes::TRANSFER_NOT_POSSIBLE => Ok(TakeThisOutcome::RetryLater(response.message)),
            codes::TRANSFER_REJECTED => Ok(TakeThisOutcome::Rejected(response.message)),
            _ => Err(NntpError::Protocol {
                code: response.code,
                message: response.message,
            }),
        }
    }

    /// Cancel a body transfer after a `Wanted` `IHAVE` offer when the body could not be
    /// obtained from the source (e.g. the source itself returned 423/430). The destination
    /// is expecting a body; sending an immediate terminator keeps its session in sync.
    pub async fn cancel_transfer(&mut self) -> Result<()> {
        debug!("Cancelling transfer after IHAVE accept (no body available)");
        self.send_command(".\r\n").await?;
        let _ = self.read_response().await?;
        Ok(())
    }
}
