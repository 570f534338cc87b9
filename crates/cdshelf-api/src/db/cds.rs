//! Postgres record store.
//!
//! Implements the `CdStore` capability over a `PgPool` with the three
//! statements the system ever issues. All constraint enforcement (NOT
//! NULL, id assignment) happens in the database; this layer only maps
//! rows and collapses every SQLx failure into `StoreError`.

use async_trait::async_trait;
use sqlx::PgPool;

use cdshelf_core::{Cd, CdDraft, CdStore, StoreError};

/// `CdStore` backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CdStore for PgStore {
    async fn list_all(&self) -> Result<Vec<Cd>, StoreError> {
        let rows = sqlx::query_as::<_, CdRow>("SELECT * FROM cds ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(rows.into_iter().map(Cd::from).collect())
    }

    async fn insert(&self, draft: &CdDraft) -> Result<Cd, StoreError> {
        // Option fields bind as NULL; an incomplete draft fails the
        // NOT NULL constraints in the database, not here.
        let row = sqlx::query_as::<_, CdRow>(
            "INSERT INTO cds (title, artist, year) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&draft.title)
        .bind(&draft.artist)
        .bind(draft.year)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        // The id arrives verbatim from the request path as text; the cast
        // makes the database do the coercion, so a non-numeric id fails
        // here as a store error. Zero rows affected is still success.
        sqlx::query("DELETE FROM cds WHERE id = $1::int")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(())
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    StoreError::new(err.to_string())
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct CdRow {
    id: i32,
    title: String,
    artist: String,
    year: i32,
}

impl From<CdRow> for Cd {
    fn from(row: CdRow) -> Self {
        Cd {
            id: row.id,
            title: row.title,
            artist: row.artist,
            year: row.year,
        }
    }
}
