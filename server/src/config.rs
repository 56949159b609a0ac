//! Environment-driven configuration.
//!
//! Everything is read once at startup into a typed struct; nothing else in
//! the system touches the environment.

use anyhow::{bail, Context};
use chrono::Duration;

/// Which record store backend to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory map; state is lost on restart. The default for development.
    Memory,
    /// PostgreSQL at the given URL.
    Postgres(String),
}

/// Server configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind, e.g. `127.0.0.1:3000`.
    pub bind_addr: String,
    /// The backend, chosen here and never per call.
    pub backend: StorageBackend,
    /// Seeded login username.
    pub username: String,
    /// Seeded login password (hashed before storage).
    pub password: String,
    /// Session lifetime.
    pub session_ttl: Duration,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `BIND_ADDR` | `127.0.0.1:3000` |
    /// | `STORAGE_BACKEND` | `memory` (or `postgres`) |
    /// | `DATABASE_URL` | required when backend is `postgres` |
    /// | `SHIRTSTOCK_USER` | `admin` |
    /// | `SHIRTSTOCK_PASSWORD` | required |
    /// | `SESSION_TTL_HOURS` | `24` |
    ///
    /// # Errors
    ///
    /// Returns error on a missing required variable or an unrecognized
    /// backend name.
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .as_str()
        {
            "memory" => StorageBackend::Memory,
            "postgres" => StorageBackend::Postgres(
                std::env::var("DATABASE_URL")
                    .context("DATABASE_URL is required when STORAGE_BACKEND=postgres")?,
            ),
            other => bail!("unrecognized STORAGE_BACKEND {other:?} (expected memory or postgres)"),
        };

        let ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .context("SESSION_TTL_HOURS must be an integer")?;

        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            backend,
            username: std::env::var("SHIRTSTOCK_USER").unwrap_or_else(|_| "admin".to_string()),
            password: std::env::var("SHIRTSTOCK_PASSWORD")
                .context("SHIRTSTOCK_PASSWORD is required")?,
            session_ttl: Duration::hours(ttl_hours),
        })
    }
}
