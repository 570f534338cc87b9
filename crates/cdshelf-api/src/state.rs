//! # Application State
//!
//! Shared state for the Axum application: the record service and, when a
//! database is configured, the pool the readiness probe checks.

use std::sync::Arc;

use sqlx::PgPool;

use cdshelf_core::{CdStore, MemoryStore};

use crate::service::CdService;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: CdService,
    /// Present only in Postgres mode; used by the readiness probe.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// State over an arbitrary store capability.
    pub fn new(store: Arc<dyn CdStore>, db_pool: Option<PgPool>) -> Self {
        Self {
            service: CdService::new(store),
            db_pool,
        }
    }

    /// State over a fresh in-memory store. Development and test mode.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), None)
    }
}
