//! Credential store trait and in-memory implementation.
//!
//! Credentials are a username plus an opaque password hash. Verification is
//! hash-then-constant-time-compare; nothing else in the system ever sees a
//! password or a hash.

use crate::error::{AuthError, Result};
use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;

/// Hashes a password for storage.
///
/// SHA-256, hex-encoded. Used when seeding credentials from configuration.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// One stored credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserCredential {
    /// Unique username.
    pub username: String,
    /// Opaque password hash, as produced by [`hash_password`].
    pub password_hash: String,
}

impl UserCredential {
    /// Builds a credential from a plaintext password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_hash: hash_password(password),
        }
    }

    /// Verifies a password attempt in constant time.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        constant_time_eq(
            self.password_hash.as_bytes(),
            hash_password(password).as_bytes(),
        )
    }
}

/// Credential lookup.
pub trait CredentialStore: Send + Sync {
    /// Look up a credential by username.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for unknown usernames, so the
    /// caller cannot distinguish "no such user" from "wrong password".
    fn find(&self, username: &str)
        -> impl std::future::Future<Output = Result<UserCredential>> + Send;
}

/// In-memory credential store, seeded once at startup.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore {
    users: Arc<HashMap<String, UserCredential>>,
}

impl MemoryCredentialStore {
    /// Builds a store from seeded credentials.
    #[must_use]
    pub fn new(credentials: impl IntoIterator<Item = UserCredential>) -> Self {
        Self {
            users: Arc::new(
                credentials
                    .into_iter()
                    .map(|c| (c.username.clone(), c))
                    .collect(),
            ),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn find(&self, username: &str) -> Result<UserCredential> {
        self.users
            .get(username)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }
}
