//! Run statistics (§3), mutated only from the Group Pipeline during result draining.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::outcome::OutcomeTag;

#[derive(Debug, Default)]
pub struct Stats {
    pub moved: AtomicU64,
    pub dup: AtomicU64,
    pub spam: AtomicU64,
    pub retry: AtomicU64,
    pub notfound: AtomicU64,
    pub other: AtomicU64,
    pub seenindb: AtomicU64,
    pub workers: AtomicU64,
}

impl Stats {
    pub fn record(&self, tag: OutcomeTag) {
        let counter = match tag {
            OutcomeTag::Success => &self.moved,
            OutcomeTag::Duplicate => &self.dup,
            OutcomeTag::Unwanted => &self.spam,
            OutcomeTag::Retry => &self.retry,
            OutcomeTag::NotFound => &self.notfound,
            OutcomeTag::SeenInDb => &self.seenindb,
            OutcomeTag::Error => &self.other,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the size of the spawned worker pool, once, at startup.
    pub fn set_workers(&self, count: u64) {
        self.workers.store(count, Ordering::Relaxed);
    }

    fn load(counter: &AtomicU64) -> u64 {
        counter.load(Ordering::Relaxed)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moved: {}, duplicate: {}, spam: {}, retry: {}, notfound: {}, seenindb: {}, other: {}, workers: {}",
            Self::load(&self.moved),
            Self::load(&self.dup),
            Self::load(&self.spam),
            Self::load(&self.retry),
            Self::load(&self.notfound),
            Self::load(&self.seenindb),
            Self::load(&self.other),
            Self::load(&self.workers),
        )
    }
}
