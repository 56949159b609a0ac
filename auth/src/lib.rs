//! # Shirtstock Auth
//!
//! The access gate: session-based authentication in front of the inventory
//! API. The rest of the system consumes exactly one thing from this crate —
//! the pass/fail verdict of [`middleware::require_session`] — and never
//! inspects credentials itself.
//!
//! ## Pieces
//!
//! - [`SessionStore`]: opaque session state with TTL expiry, keyed by a
//!   random token carried in an `HttpOnly` cookie
//! - [`CredentialStore`]: username → opaque password hash lookup
//! - [`handlers`]: login / logout / session-info endpoints
//! - [`middleware::require_session`]: the gate itself; unauthenticated
//!   requests get 401 before any protected handler runs

pub mod credentials;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod session;

pub use credentials::{hash_password, CredentialStore, MemoryCredentialStore, UserCredential};
pub use error::{AuthError, Result};
pub use handlers::{auth_router, AuthState};
pub use middleware::{require_session, CurrentUser};
pub use session::{MemorySessionStore, Session, SessionId, SessionStore};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "ssid";
