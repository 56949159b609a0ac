//! The synchronization contract: mutate, invalidate on success, refetch.
//!
//! Every successful create/update/delete invalidates the list cache; the
//! next read refetches the full list. A failed mutation leaves the cache
//! untouched — the caller keeps its (stale but consistent) view and its
//! form state, and may simply retry.
//!
//! Concurrent mutations are neither queued nor coalesced: each one
//! independently reports success or failure and independently invalidates
//! on success.

use crate::api::{ApiResult, InventoryApi};
use crate::cache::ListCache;
use shirtstock_core::{Filter, Projection, RecordId, ShirtDraft, ShirtRecord};

/// Mutations plus cached reads over an [`InventoryApi`].
#[derive(Clone, Debug)]
pub struct SyncClient<A> {
    api: A,
    cache: ListCache,
}

impl<A: InventoryApi> SyncClient<A> {
    /// Wraps an API with a fresh (stale) cache.
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: ListCache::new(),
        }
    }

    /// The cache, for loading-state queries.
    #[must_use]
    pub const fn cache(&self) -> &ListCache {
        &self.cache
    }

    /// Returns the record list, from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns the fetch error on a cache miss.
    pub async fn records(&self) -> ApiResult<Vec<ShirtRecord>> {
        self.cache.get(&self.api).await
    }

    /// Returns the grouped, ordered view of the records under `filter`.
    ///
    /// Filtering is local: the cache is keyed by the full list, not by
    /// filter criteria.
    ///
    /// # Errors
    ///
    /// Returns the fetch error on a cache miss.
    pub async fn projection(&self, filter: &Filter) -> ApiResult<Projection> {
        let records = self.records().await?;
        Ok(Projection::compute(&records, filter))
    }

    /// Creates a record, invalidating the cache on success.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the cache is left untouched.
    pub async fn create(&self, draft: ShirtDraft) -> ApiResult<ShirtRecord> {
        let record = self.api.create(draft).await?;
        self.cache.invalidate().await;
        Ok(record)
    }

    /// Updates a record, invalidating the cache on success.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the cache is left untouched.
    pub async fn update(&self, id: RecordId, draft: ShirtDraft) -> ApiResult<ShirtRecord> {
        let record = self.api.update(id, draft).await?;
        self.cache.invalidate().await;
        Ok(record)
    }

    /// Deletes a record, invalidating the cache on success.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the cache is left untouched.
    pub async fn delete(&self, id: RecordId) -> ApiResult<()> {
        self.api.delete(id).await?;
        self.cache.invalidate().await;
        Ok(())
    }
}
