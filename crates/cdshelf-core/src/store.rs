//! The record store capability.
//!
//! The service is constructed over `Arc<dyn CdStore>` so that the Postgres
//! store and the in-memory test double are interchangeable. Each method is
//! a single statement against the store with exactly two outcomes: a value
//! or a [`StoreError`].

use async_trait::async_trait;
use thiserror::Error;

use crate::record::{Cd, CdDraft};

/// Any failure surfaced by the record store: connectivity loss, constraint
/// violations, malformed identifiers. There is intentionally no finer
/// taxonomy — the HTTP adapter reports every store failure the same way.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// The persistence capability consumed by the record service.
///
/// Conceptually a single `execute(statement, params)` capability; the
/// three operations below are the three statements the system ever issues.
#[async_trait]
pub trait CdStore: Send + Sync {
    /// All records, ascending by id. An empty store yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Cd>, StoreError>;

    /// Insert the draft and return the stored record with its assigned id.
    /// Drafts with missing fields violate the store's NOT NULL discipline.
    async fn insert(&self, draft: &CdDraft) -> Result<Cd, StoreError>;

    /// Delete the record matching `id`. The id arrives verbatim from the
    /// request path; coercion to a numeric key happens here, and a
    /// malformed id is a [`StoreError`]. Deleting an id that does not
    /// exist is a successful no-op.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}
