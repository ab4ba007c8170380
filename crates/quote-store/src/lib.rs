//! Last-good live quote snapshots.
//!
//! The external collaborator polls its quote source on a fixed cadence and
//! applies each poll here. A failed poll retains the previous snapshot:
//! stale-but-present data is strictly preferable to an empty display. Only
//! sustained failure turns the staleness indicator on.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use reco_core::{QuoteSnapshot, RecoError};
use symbol_resolver::quote_key;

/// Poll cadence of the external quote collaborator
pub const POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Consecutive failed polls before the store reports itself stale
const DEFAULT_STALE_AFTER: u32 = 3;

/// Port to the external quote source. Implementations do the I/O; the
/// store never does.
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    async fn fetch(&self, symbols: &[String]) -> Result<HashMap<String, QuoteSnapshot>, RecoError>;
}

/// Concurrent symbol → snapshot map with retain-on-failure semantics
pub struct QuoteStore {
    quotes: DashMap<String, QuoteSnapshot>,
    consecutive_failures: AtomicU32,
    stale_after: u32,
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStore {
    pub fn new() -> Self {
        Self {
            quotes: DashMap::new(),
            consecutive_failures: AtomicU32::new(0),
            stale_after: DEFAULT_STALE_AFTER,
        }
    }

    pub fn with_stale_after(stale_after: u32) -> Self {
        Self {
            stale_after,
            ..Self::new()
        }
    }

    /// Apply one poll result. Success upserts snapshots and resets the
    /// failure counter; failure leaves every previous snapshot in place.
    pub fn apply_poll(&self, result: Result<HashMap<String, QuoteSnapshot>, RecoError>) {
        match result {
            Ok(snapshots) => {
                for (symbol, snapshot) in snapshots {
                    self.quotes.insert(quote_key(&symbol), snapshot);
                }
                self.consecutive_failures.store(0, Ordering::Relaxed);
            }
            Err(err) => {
                let failures = self.consecutive_failures.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::warn!(%err, failures, "quote poll failed; retaining last snapshot");
            }
        }
    }

    /// Run one poll cycle against the feed port
    pub async fn poll_once(&self, feed: &dyn QuoteFeed, symbols: &[String]) {
        self.apply_poll(feed.fetch(symbols).await);
    }

    /// Case-insensitive, suffix-normalized lookup. A symbol the feed has
    /// never reported comes back as the explicit miss shape.
    pub fn get(&self, symbol: &str) -> QuoteSnapshot {
        self.quotes
            .get(&quote_key(symbol))
            .map(|q| q.clone())
            .unwrap_or_else(QuoteSnapshot::miss)
    }

    /// True only after sustained repeated poll failures
    pub fn is_stale(&self) -> bool {
        self.consecutive_failures.load(Ordering::Relaxed) >= self.stale_after
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
