//! Login, logout and session-info handlers.
//!
//! # Routes
//!
//! - `POST /login` — verify credentials, mint a session, set the cookie
//! - `POST /logout` — destroy the session, clear the cookie
//! - `GET /session` — who am I (200 with the username, or 401)

use crate::credentials::CredentialStore;
use crate::error::AuthError;
use crate::middleware::session_cookie;
use crate::session::{Session, SessionStore};
use crate::SESSION_COOKIE;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Shared state for the gate: session store, credential store, session TTL.
#[derive(Clone, Debug)]
pub struct AuthState<S, C> {
    /// Session storage.
    pub sessions: S,
    /// Credential lookup.
    pub credentials: C,
    /// How long a freshly minted session lives.
    pub session_ttl: Duration,
}

impl<S, C> AuthState<S, C> {
    /// Creates gate state with the given TTL.
    pub const fn new(sessions: S, credentials: C, session_ttl: Duration) -> Self {
        Self {
            sessions,
            credentials,
            session_ttl,
        }
    }
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password, verified against the stored hash.
    pub password: String,
}

/// Body returned by login and session-info.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    /// The authenticated username.
    pub username: String,
}

#[derive(Serialize)]
struct GateErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::InvalidCredentials | Self::SessionNotFound | Self::SessionExpired => {
                (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED")
            }
            Self::Unavailable(detail) => {
                tracing::error!(error = %detail, "session store unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
        };
        let body = GateErrorBody {
            code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the authentication router.
///
/// Mounted outside the gate; these are the only endpoints an
/// unauthenticated caller can reach besides the health check.
pub fn auth_router<S, C>(state: AuthState<S, C>) -> Router
where
    S: SessionStore + Clone + 'static,
    C: CredentialStore + Clone + 'static,
{
    Router::new()
        .route("/login", post(login::<S, C>))
        .route("/logout", post(logout::<S, C>))
        .route("/session", get(session_info::<S, C>))
        .with_state(state)
}

async fn login<S, C>(
    State(state): State<AuthState<S, C>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AuthError>
where
    S: SessionStore + Clone + 'static,
    C: CredentialStore + Clone + 'static,
{
    let credential = state.credentials.find(&request.username).await?;
    if !credential.verify(&request.password) {
        tracing::debug!(username = %request.username, "login rejected");
        return Err(AuthError::InvalidCredentials);
    }

    let session = Session::new(credential.username.clone(), state.session_ttl);
    let cookie = format!(
        "{SESSION_COOKIE}={}; HttpOnly; SameSite=Lax; Path=/",
        session.id.as_str()
    );
    state.sessions.create(session).await?;
    tracing::info!(username = %credential.username, "login succeeded");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionInfo {
            username: credential.username,
        }),
    )
        .into_response())
}

async fn logout<S, C>(
    State(state): State<AuthState<S, C>>,
    headers: HeaderMap,
) -> Result<Response, AuthError>
where
    S: SessionStore + Clone + 'static,
    C: CredentialStore + Clone + 'static,
{
    if let Some(id) = session_cookie(&headers) {
        state.sessions.delete(&id).await?;
    }
    // Expire the cookie regardless of whether a session existed.
    let cookie = format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]).into_response())
}

async fn session_info<S, C>(
    State(state): State<AuthState<S, C>>,
    headers: HeaderMap,
) -> Result<Json<SessionInfo>, AuthError>
where
    S: SessionStore + Clone + 'static,
    C: CredentialStore + Clone + 'static,
{
    let id = session_cookie(&headers).ok_or(AuthError::SessionNotFound)?;
    let session = state.sessions.get(&id).await?;
    Ok(Json(SessionInfo {
        username: session.username,
    }))
}
