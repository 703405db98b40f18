//! Query API server for the Stayfinder property service.
//!
//! This crate provides an Axum HTTP server that exposes the two
//! read-only endpoints over the persisted property data:
//!
//! - `GET /api/property` -- JSON array of all property records
//! - `GET /api/property/count` -- `{"count": <integer>}`
//!
//! # Architecture
//!
//! Handlers delegate to the [`PropertyService`] facade, a stateless
//! pass-through to the persistence gateway. Every request re-reads the
//! authoritative store; there is no caching, filtering, or pagination.
//! Storage failures are rendered as generic 500 responses with the
//! detail kept in the server log.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod service;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use service::PropertyService;
pub use state::AppState;
