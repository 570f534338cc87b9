//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented record routes into a single OpenAPI
//! document served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the record surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cdshelf API",
        version = "0.1.0",
        description = "Minimal CD catalog: list, create, and delete records. \
                       No authentication, no pagination, no updates — PUT and \
                       PATCH intentionally return 404. Every store failure is \
                       reported as 500 with an `{error}` body.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
    ),
    paths(
        crate::routes::cds::list_cds,
        crate::routes::cds::create_cd,
        crate::routes::cds::delete_cd,
    ),
    components(schemas(
        crate::routes::cds::CdBody,
        crate::routes::cds::NewCdBody,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "cds", description = "CD record operations"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
