//! Stale-response defense for refetching views.
//!
//! Requests are not cancelled when a view refetches: an older, slower
//! response can still resolve after a newer one. Instead of letting
//! last-to-arrive win implicitly, a view takes a [`FetchTicket`] per
//! refetch and only applies a response whose ticket is still current.
//!
//! ```
//! use propkit_client::FetchSequencer;
//!
//! let seq = FetchSequencer::new();
//! let stale = seq.begin();
//! let fresh = seq.begin();
//! assert!(!seq.accept(&stale));
//! assert!(seq.accept(&fresh));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter; one per refetching view/collection.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    latest: AtomicU64,
}

/// Proof of which fetch generation a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating every earlier ticket.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket { generation }
    }

    /// Whether a response carrying this ticket should be applied.
    pub fn accept(&self, ticket: &FetchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.generation
    }
}
