//! # API Error Type
//!
//! Single error kind at the HTTP boundary: a store failure. Every one
//! maps to 500 with a flat `{"error": <message>}` body, the contract the
//! catalog clients consume. The raw store message is returned
//! deliberately; see DESIGN.md before changing that.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use cdshelf_core::StoreError;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// The store failure message, verbatim.
    pub error: String,
}

/// Application-level error implementing [`IntoResponse`].
///
/// There is no validation kind and no 4xx mapping: malformed ids and
/// constraint violations surface from the store like any other failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Store(err) = self;
        tracing::error!(error = %err, "record store failure");

        let body = ErrorBody {
            error: err.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
