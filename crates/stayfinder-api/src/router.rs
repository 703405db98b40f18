//! Axum router construction for the query API.
//!
//! Assembles the REST routes into a single [`Router`] with CORS
//! middleware enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the query server.
///
/// The router includes:
/// - `GET /api/property` -- list all properties
/// - `GET /api/property/count` -- current property count
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/property", get(handlers::list_properties))
        .route("/api/property/count", get(handlers::property_count))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
