//! # cdshelf-api — Axum HTTP service for the CD catalog
//!
//! Binds the three record operations to HTTP and nothing more:
//!
//! | Method | Path           | Operation | Success | Failure |
//! |--------|----------------|-----------|---------|---------|
//! | GET    | `/api/cds`     | list      | 200     | 500     |
//! | POST   | `/api/cds`     | create    | 201     | 500     |
//! | DELETE | `/api/cds/:id` | delete    | 204     | 500     |
//!
//! Anything else on the record path space is 404, including PUT and PATCH
//! (there is no update operation). Every store failure is reported as
//! 500 with a `{"error": <text>}` body; there is no client-visible
//! distinction between bad input and an unavailable store.
//!
//! Health probes (`/health/*`) and the OpenAPI document (`/openapi.json`)
//! are mounted beside the record routes.
//!
//! ## Architecture
//!
//! Handlers hold no business logic; they delegate to [`service::CdService`],
//! which issues exactly one statement per call against the injected
//! [`CdStore`](cdshelf_core::CdStore) capability. The Postgres store lives
//! in [`db`]; without a configured database the service runs over the
//! in-memory store from `cdshelf-core`.

pub mod config;
pub mod db;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Assemble the application router.
///
/// Unmatched paths fall through to Axum's default 404. Method mismatches
/// on the record paths are given explicit 404 fallbacks inside
/// [`routes::cds::router`] so PUT/PATCH never surface as 405.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::cds::router())
        .merge(routes::health::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
