//! # CD Record Routes
//!
//! - `GET    /api/cds`     — list all records, ascending id
//! - `POST   /api/cds`     — create a record, store assigns the id
//! - `DELETE /api/cds/:id` — delete by id, idempotent
//!
//! The method routers carry explicit 404 fallbacks: PUT and PATCH on the
//! record paths fall through to not-found instead of Axum's default 405.
//! No update operation exists on this surface, so those methods are
//! unmatched rather than merely disallowed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cdshelf_core::{Cd, CdDraft};

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Assemble the record router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/cds",
            get(list_cds).post(create_cd).fallback(unmatched_method),
        )
        .route(
            "/api/cds/:id",
            delete(delete_cd).fallback(unmatched_method),
        )
}

/// A record on the wire: `{id, title, artist, year}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CdBody {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub year: i32,
}

impl From<Cd> for CdBody {
    fn from(cd: Cd) -> Self {
        Self {
            id: cd.id,
            title: cd.title,
            artist: cd.artist,
            year: cd.year,
        }
    }
}

/// Creation payload. Fields the client omits reach the store as NULL and
/// fail its constraints there; the adapter validates nothing.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct NewCdBody {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i32>,
}

impl From<NewCdBody> for CdDraft {
    fn from(body: NewCdBody) -> Self {
        CdDraft {
            title: body.title,
            artist: body.artist,
            year: body.year,
        }
    }
}

/// GET /api/cds — all records in ascending id order.
#[utoipa::path(
    get,
    path = "/api/cds",
    responses(
        (status = 200, description = "All records, ascending id; empty array when none exist", body = [CdBody]),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "cds"
)]
pub(crate) async fn list_cds(
    State(state): State<AppState>,
) -> Result<Json<Vec<CdBody>>, ApiError> {
    let cds = state.service.list().await?;
    Ok(Json(cds.into_iter().map(CdBody::from).collect()))
}

/// POST /api/cds — create a record.
#[utoipa::path(
    post,
    path = "/api/cds",
    request_body = NewCdBody,
    responses(
        (status = 201, description = "Created record with its assigned id", body = CdBody),
        (status = 500, description = "Store failure, including constraint violations", body = ErrorBody),
    ),
    tag = "cds"
)]
pub(crate) async fn create_cd(
    State(state): State<AppState>,
    Json(body): Json<NewCdBody>,
) -> Result<(StatusCode, Json<CdBody>), ApiError> {
    let cd = state.service.create(&body.into()).await?;
    Ok((StatusCode::CREATED, Json(cd.into())))
}

/// DELETE /api/cds/:id — delete a record. 204 whether or not it existed.
#[utoipa::path(
    delete,
    path = "/api/cds/{id}",
    params(
        ("id" = String, Path, description = "Record id, passed to the store verbatim"),
    ),
    responses(
        (status = 204, description = "Deleted, or no such record existed"),
        (status = 500, description = "Store failure, including malformed ids", body = ErrorBody),
    ),
    tag = "cds"
)]
pub(crate) async fn delete_cd(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Methods with no operation on a matched record path: 404, not 405.
async fn unmatched_method() -> StatusCode {
    StatusCode::NOT_FOUND
}
