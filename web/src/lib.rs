//! # Shirtstock Web
//!
//! Axum HTTP surface for the Shirtstock inventory service.
//!
//! This crate is imperative shell only: request parsing, response
//! serialization and the status mapping in [`AppError`]. Business rules live
//! in `shirtstock-core`; the login/session machinery lives in
//! `shirtstock-auth` and is consumed here solely as a pass/fail gate in
//! front of the inventory routes.
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Gate** checks the session cookie (401 stops here)
//! 3. **Extract** the payload (JSON body, path id)
//! 4. **Dispatch** to the inventory service
//! 5. **Map result** to a response, or a domain error to `{code, message}`
//!
//! # Example
//!
//! ```ignore
//! use shirtstock_web::{app_router, AppState};
//!
//! let app = app_router(AppState::new(store), gate_state);
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod handlers;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use shirtstock_auth::{auth_router, require_session, AuthState, CredentialStore, SessionStore};
use shirtstock_core::RecordStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

/// Compose the full application router.
///
/// - `GET /health` — liveness, outside the gate
/// - `POST /api/login`, `POST /api/logout`, `GET /api/session` — the gate's
///   own endpoints
/// - `/api/tshirts...` — the inventory surface, behind the gate
pub fn app_router<S, SS, C>(state: AppState<S>, gate: AuthState<SS, C>) -> Router
where
    S: RecordStore + Clone + 'static,
    SS: SessionStore + Clone + 'static,
    C: CredentialStore + Clone + 'static,
{
    let inventory = Router::new()
        .route(
            "/tshirts",
            get(handlers::inventory::list_records::<S>)
                .post(handlers::inventory::create_record::<S>),
        )
        .route(
            "/tshirts/:id",
            get(handlers::inventory::get_record::<S>)
                .put(handlers::inventory::update_record::<S>)
                .delete(handlers::inventory::delete_record::<S>),
        )
        .route_layer(from_fn_with_state(gate.clone(), require_session::<SS, C>))
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api", auth_router(gate).merge(inventory))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
