//! The gate itself: a middleware that turns "no valid session" into 401.
//!
//! Protected routers attach this with `axum::middleware::from_fn_with_state`;
//! everything behind it can assume the request carries an authenticated
//! identity. Handlers that want the username can read the [`CurrentUser`]
//! extension, but the inventory surface only relies on the pass/fail verdict.

use crate::error::AuthError;
use crate::handlers::AuthState;
use crate::session::{SessionId, SessionStore};
use crate::SESSION_COOKIE;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The authenticated username, inserted into request extensions by the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub String);

/// Extracts the session token from the `Cookie` header, if present.
#[must_use]
pub fn session_cookie(headers: &HeaderMap) -> Option<SessionId> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| SessionId::from_token(value))
    })
}

/// Rejects unauthenticated requests with 401 before the inner handler runs.
pub async fn require_session<S, C>(
    State(state): State<AuthState<S, C>>,
    mut request: Request,
    next: Next,
) -> Response
where
    S: SessionStore + Clone + 'static,
    C: Clone + Send + Sync + 'static,
{
    let Some(id) = session_cookie(request.headers()) else {
        return AuthError::SessionNotFound.into_response();
    };

    match state.sessions.get(&id).await {
        Ok(session) => {
            request.extensions_mut().insert(CurrentUser(session.username));
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}
