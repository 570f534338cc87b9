//! cdshelf API entry point.
//!
//! Reads configuration from the environment, connects to Postgres (or
//! falls back to the in-memory store), and serves the router.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cdshelf_api::config::AppConfig;
use cdshelf_api::db::{self, PgStore};
use cdshelf_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let state = match db::init_pool(&config).await? {
        Some(pool) => AppState::new(Arc::new(PgStore::new(pool.clone())), Some(pool)),
        None => AppState::in_memory(),
    };

    let app = cdshelf_api::app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "cdshelf API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
