//! # Database Persistence Layer
//!
//! Postgres persistence for CD records via SQLx.
//!
//! The database is **optional**. With a configured connection URL the API
//! persists records to PostgreSQL; without one it runs over the in-memory
//! store (suitable for development and testing, not for durability).

pub mod cds;

pub use cds::PgStore;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::AppConfig;

/// Initialize the connection pool and run embedded migrations.
///
/// Returns `None` when no database is configured (in-memory-only mode).
/// Returns `Err` when a URL is configured but the connection or a
/// migration fails.
pub async fn init_pool(config: &AppConfig) -> Result<Option<PgPool>, sqlx::Error> {
    let url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!(
                "no database configured — running in-memory only mode. \
                 Records will not survive restarts."
            );
            return Ok(None);
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(url)
        .await?;

    tracing::info!("connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("database migrations applied");

    Ok(Some(pool))
}
