//! In-memory record store backend for Shirtstock.
//!
//! The development and test backend: a `RwLock`-guarded map. Durable storage
//! lives in `shirtstock-postgres`; both implement the same
//! [`RecordStore`] trait and the binary picks one at startup.

#![forbid(unsafe_code)]

use shirtstock_core::error::StoreError;
use shirtstock_core::record::{RecordId, ShirtDraft, ShirtRecord};
use shirtstock_core::store::{RecordStore, StoreResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory record store.
///
/// The `(color, size)` uniqueness scan runs under the write guard, so a
/// duplicate-create race resolves to exactly one winner: whichever writer
/// takes the guard second observes the first writer's record and fails with
/// `DuplicatePair`.
///
/// Cloning yields another handle to the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<HashMap<RecordId, ShirtRecord>>>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn pair_taken(
        records: &HashMap<RecordId, ShirtRecord>,
        draft: &ShirtDraft,
        skip: Option<RecordId>,
    ) -> bool {
        records
            .values()
            .any(|r| Some(r.id) != skip && r.color == draft.color && r.size == draft.size)
    }
}

impl RecordStore for MemoryRecordStore {
    async fn create(&self, draft: ShirtDraft) -> StoreResult<ShirtRecord> {
        let mut records = self.records.write().await;
        if Self::pair_taken(&records, &draft, None) {
            return Err(StoreError::DuplicatePair {
                color: draft.color,
                size: draft.size,
            });
        }
        let record = ShirtRecord::from_draft(RecordId::new(), draft);
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: RecordId) -> StoreResult<ShirtRecord> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<ShirtRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn update(&self, id: RecordId, draft: ShirtDraft) -> StoreResult<ShirtRecord> {
        let mut records = self.records.write().await;
        if !records.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        if Self::pair_taken(&records, &draft, Some(id)) {
            return Err(StoreError::DuplicatePair {
                color: draft.color,
                size: draft.size,
            });
        }
        let record = ShirtRecord::from_draft(id, draft);
        records.insert(id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: RecordId) -> StoreResult<()> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
