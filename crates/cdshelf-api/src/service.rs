//! # Record Service
//!
//! The core of the system: three stateless operations, each a single
//! round trip to the injected store capability. No retry, no local
//! recovery, no state between calls — each operation has exactly two
//! outcomes, a value or a `StoreError` that propagates unchanged to the
//! HTTP adapter.

use std::sync::Arc;

use cdshelf_core::{Cd, CdDraft, CdStore, StoreError};

/// Stateless service over an injected [`CdStore`].
///
/// The adapter owns the service; the service borrows the store capability
/// for the duration of each call. Cloning is cheap (one `Arc`).
#[derive(Clone)]
pub struct CdService {
    store: Arc<dyn CdStore>,
}

impl CdService {
    pub fn new(store: Arc<dyn CdStore>) -> Self {
        Self { store }
    }

    /// All records in ascending id order. An empty catalog is a success.
    pub async fn list(&self) -> Result<Vec<Cd>, StoreError> {
        self.store.list_all().await
    }

    /// Insert the draft; the store assigns the id.
    pub async fn create(&self, draft: &CdDraft) -> Result<Cd, StoreError> {
        self.store.insert(draft).await
    }

    /// Delete by id. Idempotent: a missing id is not an error. The id is
    /// passed through as text; the store decides whether it is well-formed.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete_by_id(id).await
    }
}
