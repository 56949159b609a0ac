//! Inventory CRUD handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/api/tshirts` | 200 list | 500 |
//! | GET | `/api/tshirts/{id}` | 200 record | 404, 500 |
//! | POST | `/api/tshirts` | 201 record | 400, 409, 500 |
//! | PUT | `/api/tshirts/{id}` | 200 record | 400, 404, 409, 500 |
//! | DELETE | `/api/tshirts/{id}` | 204 | 404, 500 |
//!
//! All of these sit behind the access gate; an unauthenticated caller gets
//! 401 before any of them runs. Ordering of the list is unspecified — the
//! client's projection layer owns grouping and sorting.

use crate::error::AppError;
use crate::state::AppState;
use crate::WebResult;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shirtstock_core::{RecordId, RecordStore, ShirtDraft, ShirtRecord};

/// Ids arrive as path strings; anything that does not parse as a UUID cannot
/// name a record, so it reads as 404 rather than 400.
fn parse_id(raw: &str) -> WebResult<RecordId> {
    raw.parse()
        .map_err(|_| AppError::not_found("record", raw))
}

/// GET `/api/tshirts`
pub async fn list_records<S: RecordStore>(
    State(state): State<AppState<S>>,
) -> WebResult<Json<Vec<ShirtRecord>>> {
    Ok(Json(state.inventory.list().await?))
}

/// GET `/api/tshirts/{id}`
pub async fn get_record<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> WebResult<Json<ShirtRecord>> {
    let id = parse_id(&id)?;
    Ok(Json(state.inventory.get(id).await?))
}

/// POST `/api/tshirts`
pub async fn create_record<S: RecordStore>(
    State(state): State<AppState<S>>,
    Json(draft): Json<ShirtDraft>,
) -> WebResult<(StatusCode, Json<ShirtRecord>)> {
    let record = state.inventory.create(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT `/api/tshirts/{id}`
pub async fn update_record<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(draft): Json<ShirtDraft>,
) -> WebResult<Json<ShirtRecord>> {
    let id = parse_id(&id)?;
    Ok(Json(state.inventory.update(id, draft).await?))
}

/// DELETE `/api/tshirts/{id}`
pub async fn delete_record<S: RecordStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> WebResult<StatusCode> {
    let id = parse_id(&id)?;
    state.inventory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
