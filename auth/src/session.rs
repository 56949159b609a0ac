//! Session store trait and in-memory implementation.
//!
//! Sessions are ephemeral: a random token, the authenticated username and an
//! expiry instant. Expiry is enforced on read; an expired session behaves
//! like a missing one except for the error variant, so callers can phrase
//! "please log in again" differently if they care.

use crate::error::{AuthError, Result};
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Opaque session token, carried in the session cookie.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random token (32 bytes, URL-safe base64).
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Wraps a token received from a cookie.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token string, for the `Set-Cookie` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The session token.
    pub id: SessionId,
    /// The authenticated username.
    pub username: String,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for `username` expiring `ttl` from now.
    #[must_use]
    pub fn new(username: impl Into<String>, ttl: Duration) -> Self {
        Self {
            id: SessionId::generate(),
            username: username.into(),
            expires_at: Utc::now() + ttl,
        }
    }
}

/// Session store.
///
/// This trait abstracts over session storage. The in-memory implementation
/// below is the only one shipped; the schema reserves an opaque `sessions`
/// table for a durable one.
pub trait SessionStore: Send + Sync {
    /// Store a session.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    fn create(&self, session: Session) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Look up a session, enforcing expiry.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No session has this token → `AuthError::SessionNotFound`
    /// - The session's TTL elapsed → `AuthError::SessionExpired`
    fn get(&self, id: &SessionId) -> impl std::future::Future<Output = Result<Session>> + Send;

    /// Destroy a session. Destroying an absent session is not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    fn delete(&self, id: &SessionId) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// In-memory session store. Cloning yields another handle to the same map.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    async fn create(&self, session: Session) -> Result<()> {
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> Result<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get(id).ok_or(AuthError::SessionNotFound)?;
        if session.expires_at <= Utc::now() {
            sessions.remove(id);
            return Err(AuthError::SessionExpired);
        }
        Ok(session.clone())
    }

    async fn delete(&self, id: &SessionId) -> Result<()> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}
