//! Stale-search suppression.
//!
//! A newer search triggered by further user input must not have its results
//! overwritten by an older in-flight search resolving late. Each search
//! captures a monotonically increasing sequence value; on completion the
//! result is applied only if no newer search has begun since. The network
//! call itself is never cancelled — its result is simply discarded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues and validates search sequence tickets. One session per search
/// surface (e.g. one search box).
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: AtomicU64,
}

/// Proof of which search issued a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search, superseding any still in flight.
    pub fn begin(&self) -> SearchTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket { seq }
    }

    /// True if `ticket` still belongs to the latest search.
    pub fn accept(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }
}
