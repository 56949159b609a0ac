//! Shirtstock inventory server.
//!
//! Wires the pieces together: configuration, tracing, the record store
//! backend (chosen once at startup), the access gate, and the axum router.

mod config;

use anyhow::Context;
use config::{Config, StorageBackend};
use shirtstock_auth::{AuthState, MemoryCredentialStore, MemorySessionStore, UserCredential};
use shirtstock_postgres::PostgresRecordStore;
use shirtstock_storage::MemoryRecordStore;
use shirtstock_web::{app_router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let gate = AuthState::new(
        MemorySessionStore::new(),
        MemoryCredentialStore::new([UserCredential::new(
            config.username.clone(),
            &config.password,
        )]),
        config.session_ttl,
    );

    let app = match &config.backend {
        StorageBackend::Memory => {
            tracing::info!("using in-memory record store");
            app_router(AppState::new(MemoryRecordStore::new()), gate)
        }
        StorageBackend::Postgres(url) => {
            let store = PostgresRecordStore::connect(url)
                .await
                .context("failed to connect to PostgreSQL")?;
            store.migrate().await.context("failed to run migrations")?;
            tracing::info!("using PostgreSQL record store");
            app_router(AppState::new(store), gate)
        }
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
