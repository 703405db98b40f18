//! REST API endpoint handlers for the query server.
//!
//! All handlers delegate to the [`PropertyService`]
//! facade via the shared [`AppState`]; no handler touches the store
//! directly.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/property` | List all properties |
//! | `GET` | `/api/property/count` | Current property count |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Return every property as a JSON array of records with their
/// fourteen camelCase fields.
///
/// Storage failures surface as a 500 with `{"error": "database error"}`.
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let properties = state
        .service
        .list_all()
        .await
        .map_err(ApiError::Database)?;

    Ok(Json(properties))
}

/// Return the current property count as `{"count": <integer>}`.
///
/// Storage failures surface as a 500 with `{"error": "service error"}`.
pub async fn property_count(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let count = state.service.count().await.map_err(ApiError::Service)?;

    Ok(Json(serde_json::json!({ "count": count })))
}
