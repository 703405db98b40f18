//! Shared application state for the query API server.
//!
//! [`AppState`] holds the query service the REST handlers delegate to.
//! Wrapped in [`std::sync::Arc`] and injected via Axum's `State`
//! extractor.

use stayfinder_db::DatabasePool;

use crate::service::PropertyService;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The read-only query facade.
    pub service: PropertyService,
}

impl AppState {
    /// Build state from a connected database pool.
    pub const fn new(pool: DatabasePool) -> Self {
        Self {
            service: PropertyService::new(pool),
        }
    }
}
