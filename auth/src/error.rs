//! Error types for authentication operations.

use thiserror::Error;

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Failure modes of the access gate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password.
    ///
    /// The two cases are deliberately indistinguishable to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No session exists for the presented token.
    #[error("session not found")]
    SessionNotFound,

    /// The session existed but its TTL has elapsed.
    #[error("session has expired")]
    SessionExpired,

    /// The session backend failed for infrastructure reasons.
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
