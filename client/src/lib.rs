//! # Shirtstock Client
//!
//! Typed HTTP client for the Shirtstock API plus the client-side
//! synchronization cache.
//!
//! The cache holds exactly one entry — the full record list — and is never
//! patched incrementally: every successful mutation invalidates it, and the
//! next read refetches from the server. That trades a little efficiency for
//! a lot of consistency simplicity. Filtering and grouping happen locally,
//! on the fetched list, via `shirtstock_core::Projection`.
//!
//! ## Pieces
//!
//! - [`InventoryApi`]: the transport seam; [`HttpInventoryApi`] is the
//!   reqwest implementation, tests substitute their own
//! - [`ListCache`]: the single-entry cache with keyed invalidation
//! - [`SyncClient`]: mutations + the invalidate-on-success contract

pub mod api;
pub mod cache;
pub mod sync;

pub use api::{ApiError, HttpInventoryApi, InventoryApi};
pub use cache::ListCache;
pub use sync::SyncClient;
