//! PostgreSQL record store backend for Shirtstock.
//!
//! Durable implementation of the [`RecordStore`] trait on sqlx. The
//! `(color, size)` uniqueness constraint lives in the schema, so concurrent
//! duplicate creates are resolved by the database: one insert commits, the
//! other fails with a unique violation that is translated to
//! `StoreError::DuplicatePair`.
//!
//! # Example
//!
//! ```ignore
//! use shirtstock_postgres::PostgresRecordStore;
//!
//! let store = PostgresRecordStore::connect("postgres://localhost/shirtstock").await?;
//! store.migrate().await?;
//! ```

#![forbid(unsafe_code)]

use shirtstock_core::error::StoreError;
use shirtstock_core::record::{RecordId, ShirtDraft, ShirtRecord};
use shirtstock_core::store::{RecordStore, StoreResult};
use sqlx::postgres::PgPool;
use uuid::Uuid;

/// PostgreSQL record store.
///
/// Cloning yields another handle to the same connection pool.
#[derive(Clone, Debug)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: Uuid,
    size: String,
    color: String,
    quantity: i32,
}

impl From<RecordRow> for ShirtRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            size: row.size,
            color: row.color,
            quantity: row.quantity,
        }
    }
}

impl PostgresRecordStore {
    /// Connects to the database and builds a store over a fresh pool.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the connection cannot be
    /// established.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| StoreError::Unavailable(format!("failed to connect: {e}")))?;
        Ok(Self::new(pool))
    }

    /// Builds a store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs schema migrations.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if a migration fails.
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(format!("migration failed: {e}")))?;
        Ok(())
    }
}

/// Translates an insert/update failure, distinguishing unique violations on
/// the `(color, size)` constraint from infrastructure failures.
fn write_error(err: sqlx::Error, draft: &ShirtDraft) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::DuplicatePair {
                color: draft.color.clone(),
                size: draft.size.clone(),
            };
        }
    }
    StoreError::Unavailable(err.to_string())
}

impl RecordStore for PostgresRecordStore {
    async fn create(&self, draft: ShirtDraft) -> StoreResult<ShirtRecord> {
        let row: RecordRow = sqlx::query_as(
            r"
            INSERT INTO tshirts (size, color, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, size, color, quantity
            ",
        )
        .bind(&draft.size)
        .bind(&draft.color)
        .bind(draft.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft))?;

        Ok(row.into())
    }

    async fn get(&self, id: RecordId) -> StoreResult<ShirtRecord> {
        let row: Option<RecordRow> = sqlx::query_as(
            r"
            SELECT id, size, color, quantity
            FROM tshirts
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        row.map(Into::into).ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<ShirtRecord>> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            r"
            SELECT id, size, color, quantity
            FROM tshirts
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: RecordId, draft: ShirtDraft) -> StoreResult<ShirtRecord> {
        let row: Option<RecordRow> = sqlx::query_as(
            r"
            UPDATE tshirts
            SET size = $2, color = $3, quantity = $4
            WHERE id = $1
            RETURNING id, size, color, quantity
            ",
        )
        .bind(id.as_uuid())
        .bind(&draft.size)
        .bind(&draft.color)
        .bind(draft.quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft))?;

        row.map(Into::into).ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: RecordId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM tshirts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
