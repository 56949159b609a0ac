//! # Shirtstock Core
//!
//! Domain model and business logic for the Shirtstock inventory application.
//!
//! This crate is the functional core of the system: everything in it is either
//! pure (the projection layer) or reaches the outside world only through the
//! [`RecordStore`] trait. HTTP, sessions and persistence live in sibling crates.
//!
//! ## Core Concepts
//!
//! - **Record**: one inventory entry (size, color, quantity) with a
//!   store-generated identity
//! - **Record Store**: keyed storage enforcing the `(color, size)` uniqueness
//!   constraint, injected into the service at construction time
//! - **Inventory Service**: validates and applies create/read/update/delete
//!   operations, translating store failures into the error taxonomy
//! - **Projection**: pure function from (records, filter) to the grouped,
//!   ordered view the client renders
//!
//! ## Example
//!
//! ```ignore
//! use shirtstock_core::{InventoryService, ShirtDraft};
//!
//! let service = InventoryService::new(store);
//! let record = service
//!     .create(ShirtDraft::new("M", "Red", 5))
//!     .await?;
//! assert_eq!(record.quantity, 5);
//! ```

pub mod error;
pub mod projection;
pub mod record;
pub mod service;
pub mod store;

pub use error::{InventoryError, StoreError};
pub use projection::{ColorGroup, Filter, Projection};
pub use record::{RecordId, ShirtDraft, ShirtRecord, Size};
pub use service::InventoryService;
pub use store::RecordStore;

/// Result type alias for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;
