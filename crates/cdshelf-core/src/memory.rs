//! In-memory record store.
//!
//! Backs the development "in-memory-only mode" (no `DATABASE_URL`) and the
//! integration-test double. Mirrors the SQL schema's constraints so both
//! stores surface identical outcomes: ids are assigned from a monotonic
//! counter and never reused, and drafts with missing fields fail the same
//! way a NOT NULL violation does in Postgres.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::record::{Cd, CdDraft};
use crate::store::{CdStore, StoreError};

/// Volatile store: records live in a `RwLock<Vec<Cd>>`, kept sorted by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Cd>>,
    next_id: AtomicI32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of records currently held. Test convenience.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl CdStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Cd>, StoreError> {
        // Inserts push under the same lock that allocates the id, so the
        // vec is always in ascending id order.
        Ok(self.records.read().clone())
    }

    async fn insert(&self, draft: &CdDraft) -> Result<Cd, StoreError> {
        let title = require(&draft.title, "title")?;
        let artist = require(&draft.artist, "artist")?;
        let year = draft.year.ok_or_else(|| missing_column("year"))?;

        // Id allocation and the push happen under one write lock:
        // concurrent inserts cannot interleave, so the vec stays in
        // ascending id order.
        let mut records = self.records.write();
        let cd = Cd {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title,
            artist,
            year,
        };
        records.push(cd.clone());
        Ok(cd)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let id: i32 = id
            .trim()
            .parse()
            .map_err(|_| StoreError::new(format!("invalid input syntax for type integer: \"{id}\"")))?;
        self.records.write().retain(|cd| cd.id != id);
        Ok(())
    }
}

fn require(field: &Option<String>, column: &str) -> Result<String, StoreError> {
    field.clone().ok_or_else(|| missing_column(column))
}

/// Same message shape Postgres produces for a NOT NULL violation.
fn missing_column(column: &str) -> StoreError {
    StoreError::new(format!(
        "null value in column \"{column}\" violates not-null constraint"
    ))
}
