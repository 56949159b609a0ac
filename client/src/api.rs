//! Transport seam: the `InventoryApi` trait and its reqwest implementation.
//!
//! The trait mirrors the server's boundary contract one-to-one. Error
//! responses are decoded from the `{code, message}` JSON bodies the server
//! produces, so callers branch on typed variants rather than status codes.

use reqwest::StatusCode;
use serde::Deserialize;
use shirtstock_core::{RecordId, ShirtDraft, ShirtRecord};
use thiserror::Error;

/// Result type alias for API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failures surfaced by the API client.
///
/// Mirrors the server's taxonomy so the UI can phrase each case: validation
/// keeps the form open with the offending field highlighted, conflict says
/// "this color/size already exists", unauthenticated routes to the login
/// page.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload failed validation (400). `field` names the offender.
    #[error("invalid {field}: {message}")]
    Validation {
        /// The offending field, as reported by the server.
        field: String,
        /// Human-readable explanation.
        message: String,
    },

    /// The `(color, size)` pair already exists (409).
    #[error("{message}")]
    Conflict {
        /// The server's explanation of the collision.
        message: String,
    },

    /// The record does not exist (404).
    #[error("record not found")]
    NotFound,

    /// No valid session (401).
    #[error("not authenticated")]
    Unauthenticated,

    /// The server failed (500-class).
    #[error("server error: {0}")]
    Server(String),

    /// The request never completed (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The inventory API as the synchronization layer sees it.
///
/// `HttpInventoryApi` is the production implementation; tests substitute a
/// fake to drive the cache without a server.
pub trait InventoryApi: Send + Sync {
    /// Fetch the full record list.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the caller is unauthenticated.
    fn list(&self) -> impl std::future::Future<Output = ApiResult<Vec<ShirtRecord>>> + Send;

    /// Create a record.
    ///
    /// # Errors
    ///
    /// Returns error on validation failure, pair conflict, or transport
    /// failure.
    fn create(
        &self,
        draft: ShirtDraft,
    ) -> impl std::future::Future<Output = ApiResult<ShirtRecord>> + Send;

    /// Replace a record's fields.
    ///
    /// # Errors
    ///
    /// Returns error on validation failure, missing record, pair conflict,
    /// or transport failure.
    fn update(
        &self,
        id: RecordId,
        draft: ShirtDraft,
    ) -> impl std::future::Future<Output = ApiResult<ShirtRecord>> + Send;

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns error if the record is missing or the request fails.
    fn delete(&self, id: RecordId) -> impl std::future::Future<Output = ApiResult<()>> + Send;
}

/// Error body shape produced by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
    field: Option<String>,
}

/// Reqwest-backed implementation of [`InventoryApi`].
///
/// Keeps the session cookie between calls, so one [`login`](Self::login) at
/// startup authenticates everything that follows.
#[derive(Clone, Debug)]
pub struct HttpInventoryApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryApi {
    /// Creates a client for the given base URL (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Authenticates and stores the session cookie.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthenticated` on bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<()> {
        let response = self
            .client
            .post(format!("{}/api/login", self.base_url))
            .json(&serde_json::json!({"username": username, "password": password}))
            .send()
            .await?;
        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(decode_error(response).await)
        }
    }

    async fn expect_record(response: reqwest::Response, ok: StatusCode) -> ApiResult<ShirtRecord> {
        if response.status() == ok {
            Ok(response.json().await?)
        } else {
            Err(decode_error(response).await)
        }
    }
}

/// Maps a non-success response to the error taxonomy, preferring the typed
/// body and falling back to the status code when the body is unreadable.
async fn decode_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body: Option<ErrorBody> = response.json().await.ok();

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthenticated,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::CONFLICT => ApiError::Conflict {
            message: body.map_or_else(
                || "this color/size already exists".to_string(),
                |b| b.message,
            ),
        },
        StatusCode::BAD_REQUEST => {
            let (field, message) = body.map_or_else(
                || (String::new(), "invalid request".to_string()),
                |b| (b.field.unwrap_or_default(), b.message),
            );
            ApiError::Validation { field, message }
        }
        _ => ApiError::Server(body.map_or_else(|| status.to_string(), |b| b.code)),
    }
}

impl InventoryApi for HttpInventoryApi {
    async fn list(&self) -> ApiResult<Vec<ShirtRecord>> {
        let response = self
            .client
            .get(format!("{}/api/tshirts", self.base_url))
            .send()
            .await?;
        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(decode_error(response).await)
        }
    }

    async fn create(&self, draft: ShirtDraft) -> ApiResult<ShirtRecord> {
        let response = self
            .client
            .post(format!("{}/api/tshirts", self.base_url))
            .json(&draft)
            .send()
            .await?;
        Self::expect_record(response, StatusCode::CREATED).await
    }

    async fn update(&self, id: RecordId, draft: ShirtDraft) -> ApiResult<ShirtRecord> {
        let response = self
            .client
            .put(format!("{}/api/tshirts/{id}", self.base_url))
            .json(&draft)
            .send()
            .await?;
        Self::expect_record(response, StatusCode::OK).await
    }

    async fn delete(&self, id: RecordId) -> ApiResult<()> {
        let response = self
            .client
            .delete(format!("{}/api/tshirts/{id}", self.base_url))
            .send()
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(decode_error(response).await)
        }
    }
}
