//! Single-entry cache for the full record list.
//!
//! The cache is keyed by one fixed identity — "the full record list" — and
//! is not parameterized by filter criteria; filtering happens locally after
//! fetch. Invalidation marks the entry stale, forcing the next read to go
//! back to the source of truth.

use crate::api::{ApiResult, InventoryApi};
use shirtstock_core::ShirtRecord;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The one cache entry, plus a fetch-in-flight flag the UI's loading
/// skeleton keys on.
///
/// `generation` counts invalidations. A fetch snapshots it before going to
/// the network and only stores its response if no invalidation landed in the
/// meantime; otherwise the response predates some successful mutation and
/// caching it would resurrect the pre-mutation list.
#[derive(Debug, Default)]
struct Entry {
    records: Option<Vec<ShirtRecord>>,
    fetching: bool,
    generation: u64,
}

/// Cache of the full record list with keyed invalidation.
///
/// Cloning yields another handle to the same entry, so concurrent mutations
/// share one cache and each successful one independently invalidates it.
#[derive(Clone, Debug, Default)]
pub struct ListCache {
    entry: Arc<RwLock<Entry>>,
}

impl ListCache {
    /// Creates an empty (stale) cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached list, fetching from `api` on a miss.
    ///
    /// # Errors
    ///
    /// Returns the fetch error on a miss; the cache stays stale so the next
    /// read retries.
    pub async fn get<A: InventoryApi>(&self, api: &A) -> ApiResult<Vec<ShirtRecord>> {
        let generation = {
            let mut entry = self.entry.write().await;
            if let Some(records) = &entry.records {
                return Ok(records.clone());
            }
            entry.fetching = true;
            entry.generation
        };

        let result = api.list().await;

        let mut entry = self.entry.write().await;
        entry.fetching = false;
        match result {
            Ok(records) => {
                // An invalidation that landed mid-fetch means this response
                // predates a successful mutation. Hand it to the caller, but
                // leave the entry stale so the next read refetches.
                if entry.generation == generation {
                    tracing::debug!(count = records.len(), "record list fetched");
                    entry.records = Some(records.clone());
                } else {
                    tracing::debug!("discarding fetch superseded by invalidation");
                }
                Ok(records)
            }
            Err(err) => Err(err),
        }
    }

    /// Marks the entry stale. The next [`get`](Self::get) refetches, and any
    /// fetch already in flight will not re-cache its (now stale) response.
    pub async fn invalidate(&self) {
        tracing::debug!("record list invalidated");
        let mut entry = self.entry.write().await;
        entry.records = None;
        entry.generation = entry.generation.wrapping_add(1);
    }

    /// Is a fetch currently in flight?
    pub async fn is_fetching(&self) -> bool {
        self.entry.read().await.fetching
    }

    /// Does the cache currently hold a value?
    pub async fn is_fresh(&self) -> bool {
        self.entry.read().await.records.is_some()
    }
}
