//! Fetch request/outcome records exchanged between the Group Pipeline and Workers (§3).

/// Placed by the Group Pipeline, consumed by one Worker.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub group: String,
    pub article_number: u64,
    pub message_id: String,
}

/// Produced by a Worker (or directly by the pipeline for `seenindb`).
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub tag: OutcomeTag,
    pub message_id: String,
    pub group: String,
    pub article_number: u64,
}

/// Outcome classification, driving both the Progress Store write and the stats counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeTag {
    Success,
    Duplicate,
    Unwanted,
    Retry,
    NotFound,
    SeenInDb,
    Error,
}

/// Progress Store status tag, persisted alongside each article record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Success,
    Duplicate,
    Unwanted,
    Retry,
    NotFound,
    Error,
}

impl StatusTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusTag::Success => "suc",
            StatusTag::Duplicate => "dup",
            StatusTag::Unwanted => "unw",
            StatusTag::Retry => "ret",
            StatusTag::NotFound => "nof",
            StatusTag::Error => "err",
        }
    }
}

impl OutcomeTag {
    /// Maps to the Progress Store status written by `markArticle`, if any
    /// (§4.4.1 — `seenindb` writes no article record, since one already exists).
    pub fn status(self) -> Option<StatusTag> {
        match self {
            OutcomeTag::Success => Some(StatusTag::Success),
            OutcomeTag::Duplicate => Some(StatusTag::Duplicate),
            OutcomeTag::Unwanted => Some(StatusTag::Unwanted),
            OutcomeTag::Retry => Some(StatusTag::Retry),
            OutcomeTag::NotFound => Some(StatusTag::NotFound),
            OutcomeTag::SeenInDb => None,
            OutcomeTag::Error => Some(StatusTag::Error),
        }
    }

    /// Whether this outcome advances the group cursor via `setLastId` (§4.3.1, §4.4.1).
    pub fn advances_cursor(self) -> bool {
        !matches!(self, OutcomeTag::Retry)
    }
}
