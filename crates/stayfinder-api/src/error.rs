//! Error types for the query API layer.
//!
//! [`ApiError`] unifies the failure modes into a single enum that can
//! be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! underlying storage detail is logged server-side and never rendered
//! into the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stayfinder_db::DbError;

/// Errors that can occur in the query API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store rejected the list query.
    #[error("database error")]
    Database(#[source] DbError),

    /// The count facade failed.
    #[error("service error")]
    Service(#[source] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            Self::Database(e) | Self::Service(e) => e.to_string(),
        };
        tracing::error!(error = %detail, "Query API request failed");

        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
