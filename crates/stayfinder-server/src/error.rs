//! Error types for the service binary.
//!
//! [`ServiceError`] is the top-level error type that wraps all
//! possible failure modes during startup. Loader failures are
//! deliberately absent: they are logged and tolerated, never
//! propagated out of `main`.

/// Top-level error for the service binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Database connection or migration failed.
    #[error("database error: {source}")]
    Database {
        /// The underlying data layer error.
        #[from]
        source: stayfinder_db::DbError,
    },

    /// The query API server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: stayfinder_api::ServerError,
    },
}
