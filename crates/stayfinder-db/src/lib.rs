//! Data layer for the Stayfinder property service (`SQLite`).
//!
//! `SQLite` holds the single `property` table. The loader performs one
//! atomic batch insert at startup; the read API issues independent
//! reads against the same pool for the lifetime of the process.
//!
//! # Modules
//!
//! - [`sqlite`] -- `SQLite` connection pool and configuration
//! - [`property_store`] -- Property insert and query operations
//! - [`error`] -- Shared error types

pub mod error;
pub mod property_store;
pub mod sqlite;

// Re-export primary types for convenience.
pub use error::DbError;
pub use property_store::{PropertyRow, PropertyStore};
pub use sqlite::{DatabaseConfig, DatabasePool};
