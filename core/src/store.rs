//! Record store trait.
//!
//! This trait abstracts over record persistence. Two backends exist: the
//! in-memory store in `shirtstock-storage` and the PostgreSQL store in
//! `shirtstock-postgres`. The backend is chosen once at process startup and
//! injected into the service; nothing branches on it per call.
//!
//! # Implementation Notes
//!
//! - Writes are atomic per record: a failed insert/update/delete leaves no
//!   partial state behind.
//! - The `(color, size)` uniqueness constraint is the store's responsibility.
//!   Backends must check-and-write atomically with respect to concurrent
//!   writers so that a duplicate-create race resolves to exactly one winner.
//! - `list` makes no ordering promise; ordering is the projection layer's job.

use crate::error::StoreError;
use crate::record::{RecordId, ShirtDraft, ShirtRecord};

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Durable keyed storage for inventory records.
pub trait RecordStore: Send + Sync {
    /// Persist a new record, assigning its identity.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The draft collides with an existing `(color, size)` pair
    ///   → `StoreError::DuplicatePair`
    /// - The backend fails → `StoreError::Unavailable`
    fn create(
        &self,
        draft: ShirtDraft,
    ) -> impl std::future::Future<Output = StoreResult<ShirtRecord>> + Send;

    /// Fetch a record by id.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No record has this id → `StoreError::NotFound`
    /// - The backend fails → `StoreError::Unavailable`
    fn get(
        &self,
        id: RecordId,
    ) -> impl std::future::Future<Output = StoreResult<ShirtRecord>> + Send;

    /// Fetch all records, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    fn list(&self) -> impl std::future::Future<Output = StoreResult<Vec<ShirtRecord>>> + Send;

    /// Replace a record's fields, keeping its identity.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No record has this id → `StoreError::NotFound`
    /// - The new fields collide with another record's `(color, size)` pair
    ///   → `StoreError::DuplicatePair`
    /// - The backend fails → `StoreError::Unavailable`
    fn update(
        &self,
        id: RecordId,
        draft: ShirtDraft,
    ) -> impl std::future::Future<Output = StoreResult<ShirtRecord>> + Send;

    /// Remove a record.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No record has this id → `StoreError::NotFound`
    /// - The backend fails → `StoreError::Unavailable`
    fn delete(&self, id: RecordId) -> impl std::future::Future<Output = StoreResult<()>> + Send;
}
