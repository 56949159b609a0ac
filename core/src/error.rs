//! Error taxonomy for inventory operations.
//!
//! Two layers: [`StoreError`] is what a record store backend reports, and
//! [`InventoryError`] is what the service surfaces to callers. The service
//! translates between the two so raw storage errors never leak upward.

use crate::record::RecordId;
use thiserror::Error;

/// Failures reported by a [`RecordStore`](crate::store::RecordStore) backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A write would violate the `(color, size)` uniqueness constraint.
    #[error("a record for color {color:?} and size {size:?} already exists")]
    DuplicatePair {
        /// Color of the conflicting pair.
        color: String,
        /// Size of the conflicting pair.
        size: String,
    },

    /// The referenced record does not exist.
    #[error("record {0} not found")]
    NotFound(RecordId),

    /// The backend is unreachable or failed for infrastructure reasons.
    ///
    /// The message is for logs only; callers see a generic failure.
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Failures surfaced by the inventory service.
///
/// This is the taxonomy the HTTP layer maps onto status codes: validation
/// failures are detected before any write is attempted, constraint violations
/// are detected at write time, and infrastructure failures are reported
/// without detail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The payload failed shape or range validation. Never retried.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// The offending field.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },

    /// A record for this `(color, size)` pair already exists.
    ///
    /// Surfaced distinctly from validation so clients can explain the
    /// collision instead of re-prompting for input.
    #[error("a record for color {color:?} and size {size:?} already exists")]
    Conflict {
        /// Color of the conflicting pair.
        color: String,
        /// Size of the conflicting pair.
        size: String,
    },

    /// The referenced record does not exist.
    #[error("record {0} not found")]
    NotFound(RecordId),

    /// Persistence failed for infrastructure reasons.
    #[error("record store unavailable")]
    StoreUnavailable,
}

impl InventoryError {
    /// Shorthand for an [`InventoryError::InvalidInput`].
    #[must_use]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicatePair { color, size } => Self::Conflict { color, size },
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Unavailable(detail) => {
                tracing::error!(error = %detail, "record store unavailable");
                Self::StoreUnavailable
            }
        }
    }
}
