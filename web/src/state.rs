//! Application state for Axum handlers.

use shirtstock_core::{InventoryService, RecordStore};

/// Application state shared across all HTTP handlers.
///
/// Generic over the record store backend; the binary picks the backend once
/// at startup and every handler is monomorphized over it. Cloning is cheap —
/// both backends are handles.
#[derive(Clone, Debug)]
pub struct AppState<S> {
    /// The inventory service, constructed over the chosen store.
    pub inventory: InventoryService<S>,
}

impl<S: RecordStore> AppState<S> {
    /// Create application state over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            inventory: InventoryService::new(store),
        }
    }
}
