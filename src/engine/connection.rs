//! Source/destination connection abstractions the Worker and Group Pipeline
//! are generic over (§8 ambient test tooling), so end-to-end scenarios can
//! run against in-memory fakes instead of real sockets.

use async_trait::async_trait;

use crate::client::{IhaveOffer, NntpClient, TakeThisOutcome};
use crate::commands::{ActiveGroup, GroupInfo, HdrEntry};
use crate::{NntpError, Result as NntpResult};

/// The source-side operations a Worker or Group Pipeline needs.
#[async_trait]
pub trait SourceConnection: Send {
    async fn select_group(&mut self, group: &str) -> NntpResult<GroupInfo>;
    async fn xhdr_message_ids(&mut self, range: &str) -> NntpResult<Vec<HdrEntry>>;
    /// Fetch the full article as a line vector. Returns
    /// [`NntpError::NoSuchArticle`] for 423/430.
    async fn fetch_article_lines(&mut self, article_number: u64) -> NntpResult<Vec<String>>;
}

/// The destination-side operations a Worker needs.
#[async_trait]
pub trait DestConnection: Send {
    async fn ihave_offer(&mut self, message_id: &str) -> NntpResult<IhaveOffer>;
    async fn take_this(&mut self, body_lines: &[String]) -> NntpResult<TakeThisOutcome>;
    async fn cancel_transfer(&mut self) -> NntpResult<()>;
    async fn post(&mut self, article_text: &str) -> NntpResult<()>;
}

/// The destination-side operation the Server Orchestrator needs to enumerate
/// the group catalogue (§4.5 step 5).
#[async_trait]
pub trait GroupCatalogue: Send {
    async fn list_groups(&mut self) -> NntpResult<Vec<ActiveGroup>>;
}

#[async_trait]
impl SourceConnection for NntpClient {
    async fn select_group(&mut self, group: &str) -> NntpResult<GroupInfo> {
        self.select_group(group).await
    }

    async fn xhdr_message_ids(&mut self, range: &str) -> NntpResult<Vec<HdrEntry>> {
        self.xhdr("message-id", range).await
    }

    async fn fetch_article_lines(&mut self, article_number: u64) -> NntpResult<Vec<String>> {
        let response = self.fetch_article(&article_number.to_string()).await?;
        Ok(response.lines)
    }
}

#[async_trait]
impl DestConnection for NntpClient {
    async fn ihave_offer(&mut self, message_id: &str) -> NntpResult<IhaveOffer> {
        self.ihave_offer(message_id).await
    }

    async fn take_this(&mut self, body_lines: &[String]) -> NntpResult<TakeThisOutcome> {
        self.take_this(body_lines).await
    }

    async fn cancel_transfer(&mut self) -> NntpResult<()> {
        self.cancel_transfer().await
    }

    async fn post(&mut self, article_text: &str) -> NntpResult<()> {
        self.post(article_text).await
    }
}

#[async_trait]
impl GroupCatalogue for NntpClient {
    async fn list_groups(&mut self) -> NntpResult<Vec<ActiveGroup>> {
        self.list_active("*").await
    }
}

/// Post-mode header whitelist, matching the approved-header list the legacy
/// `NNTPClient.headers` carried.
pub const POST_HEADER_WHITELIST: &[&str] = &[
    "From",
    "Subject",
    "Message-Id",
    "Sender",
    "MIME-Version",
    "Path",
    "Newsgroups",
    "Organization",
    "Approved",
    "Distribution",
    "Lines",
    "Content-Type",
    "Content-Transfer-Encoding",
];

/// Turns a raw fetched article (headers, blank line, body) into dot-stuffed,
/// CRLF-terminated text with only whitelisted headers retained, for `post` mode.
pub fn whitelist_post_text(lines: &[String]) -> String {
    let mut out = String::new();
    let mut in_headers = true;
    for line in lines {
        if in_headers {
            if line.is_empty() {
                in_headers = false;
                out.push_str("\r\n");
                continue;
            }
            let matches = POST_HEADER_WHITELIST
                .iter()
                .any(|h| line.to_ascii_lowercase().starts_with(&h.to_ascii_lowercase()));
            if !matches {
                continue;
            }
        }
        if line.starts_with('.') {
            out.push('.');
        }
        out.push_str(line);
        out.push_str("\r\n");
    }
    out
}

pub fn is_not_found(err: &NntpError) -> bool {
    matches!(err, NntpError::NoSuchArticle(_))
}
