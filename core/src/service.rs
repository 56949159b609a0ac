//! Inventory service: validation plus store orchestration.
//!
//! The service is the only writer to the record store. It validates payloads
//! before any write is attempted (fail fast, no partial mutation), delegates
//! to the injected [`RecordStore`], and translates store failures into the
//! [`InventoryError`] taxonomy.

use crate::error::InventoryError;
use crate::record::{RecordId, ShirtDraft, ShirtRecord};
use crate::store::RecordStore;
use crate::Result;

/// Validates and applies inventory operations against a record store.
///
/// The store is injected at construction time; there is no process-wide
/// singleton. Cloning is cheap when the store is (both backends are handles).
#[derive(Clone, Debug)]
pub struct InventoryService<S> {
    store: S,
}

impl<S: RecordStore> InventoryService<S> {
    /// Creates a service over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all records, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::StoreUnavailable` if the backend fails.
    pub async fn list(&self) -> Result<Vec<ShirtRecord>> {
        Ok(self.store.list().await?)
    }

    /// Returns the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NotFound` if no record has this id.
    pub async fn get(&self, id: RecordId) -> Result<ShirtRecord> {
        Ok(self.store.get(id).await?)
    }

    /// Validates and persists a new record.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The draft fails validation → `InventoryError::InvalidInput`
    /// - The `(color, size)` pair already exists → `InventoryError::Conflict`
    /// - The backend fails → `InventoryError::StoreUnavailable`
    pub async fn create(&self, draft: ShirtDraft) -> Result<ShirtRecord> {
        validate(&draft)?;
        let record = self.store.create(draft).await?;
        tracing::info!(id = %record.id, color = %record.color, size = %record.size, "record created");
        Ok(record)
    }

    /// Validates and replaces an existing record's fields.
    ///
    /// The record's identity is preserved regardless of the payload.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The draft fails validation → `InventoryError::InvalidInput`
    /// - No record has this id → `InventoryError::NotFound`
    /// - The new pair collides with another record → `InventoryError::Conflict`
    /// - The backend fails → `InventoryError::StoreUnavailable`
    pub async fn update(&self, id: RecordId, draft: ShirtDraft) -> Result<ShirtRecord> {
        validate(&draft)?;
        let record = self.store.update(id, draft).await?;
        tracing::info!(id = %record.id, "record updated");
        Ok(record)
    }

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No record has this id → `InventoryError::NotFound`
    /// - The backend fails → `InventoryError::StoreUnavailable`
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete(id).await?;
        tracing::info!(%id, "record deleted");
        Ok(())
    }
}

/// Shape and range validation, run before any write.
fn validate(draft: &ShirtDraft) -> Result<()> {
    if draft.size.trim().is_empty() {
        return Err(InventoryError::invalid("size", "must not be empty"));
    }
    if draft.color.trim().is_empty() {
        return Err(InventoryError::invalid("color", "must not be empty"));
    }
    if draft.quantity < 0 {
        return Err(InventoryError::invalid("quantity", "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::StoreResult;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Minimal store double: a mutex-guarded map with the uniqueness scan the
    /// real backends perform.
    #[derive(Default)]
    struct MapStore {
        records: Mutex<HashMap<RecordId, ShirtRecord>>,
    }

    impl MapStore {
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

    impl RecordStore for MapStore {
        async fn create(&self, draft: ShirtDraft) -> StoreResult<ShirtRecord> {
            let mut records = self.records.lock().unwrap();
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
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(StoreError::NotFound(id))
        }

        async fn list(&self) -> StoreResult<Vec<ShirtRecord>> {
            Ok(self.records.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, id: RecordId, draft: ShirtDraft) -> StoreResult<ShirtRecord> {
            let mut records = self.records.lock().unwrap();
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
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(StoreError::NotFound(id))
        }
    }

    fn service() -> InventoryService<MapStore> {
        InventoryService::new(MapStore::default())
    }

    #[tokio::test]
    async fn create_assigns_identity() {
        let service = service();
        let record = service.create(ShirtDraft::new("M", "Red", 5)).await.unwrap();
        assert_eq!(record.size, "M");
        assert_eq!(record.color, "Red");
        assert_eq!(record.quantity, 5);

        let fetched = service.get(record.id).await.unwrap();
        assert_eq!(fetched, record);
    }

    #[tokio::test]
    async fn create_rejects_negative_quantity_before_writing() {
        let service = service();
        let err = service
            .create(ShirtDraft::new("M", "Red", -1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InventoryError::InvalidInput {
                field: "quantity",
                ..
            }
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_blank_fields() {
        let service = service();
        let err = service.create(ShirtDraft::new("", "Red", 1)).await.unwrap_err();
        assert!(matches!(err, InventoryError::InvalidInput { field: "size", .. }));

        let err = service.create(ShirtDraft::new("M", "  ", 1)).await.unwrap_err();
        assert!(matches!(err, InventoryError::InvalidInput { field: "color", .. }));
    }

    #[tokio::test]
    async fn duplicate_pair_conflicts_and_leaves_store_unchanged() {
        let service = service();
        service.create(ShirtDraft::new("M", "Red", 5)).await.unwrap();
        let err = service
            .create(ShirtDraft::new("M", "Red", 9))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Conflict { .. }));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_preserves_identity_and_checks_collisions() {
        let service = service();
        let red = service.create(ShirtDraft::new("M", "Red", 5)).await.unwrap();
        let blue = service.create(ShirtDraft::new("M", "Blue", 3)).await.unwrap();

        // Updating a record onto its own pair is fine.
        let updated = service
            .update(red.id, ShirtDraft::new("M", "Red", 0))
            .await
            .unwrap();
        assert_eq!(updated.id, red.id);
        assert_eq!(updated.quantity, 0);

        // Moving onto another record's pair conflicts.
        let err = service
            .update(blue.id, ShirtDraft::new("M", "Red", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Conflict { .. }));
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let service = service();
        let id = RecordId::new();
        let err = service
            .update(id, ShirtDraft::new("M", "Red", 1))
            .await
            .unwrap_err();
        assert_eq!(err, InventoryError::NotFound(id));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = service();
        let record = service.create(ShirtDraft::new("L", "Green", 2)).await.unwrap();
        service.delete(record.id).await.unwrap();

        let err = service.get(record.id).await.unwrap_err();
        assert_eq!(err, InventoryError::NotFound(record.id));

        let err = service.delete(record.id).await.unwrap_err();
        assert_eq!(err, InventoryError::NotFound(record.id));
    }

    #[tokio::test]
    async fn get_is_idempotent() {
        let service = service();
        let record = service.create(ShirtDraft::new("S", "Black", 7)).await.unwrap();
        let first = service.get(record.id).await.unwrap();
        let second = service.get(record.id).await.unwrap();
        assert_eq!(first, second);
    }
}
