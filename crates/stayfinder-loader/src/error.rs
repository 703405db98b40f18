//! Error types for the batch loader.
//!
//! Every variant of [`LoaderError`] is non-fatal to the hosting
//! process: the server logs the failure and keeps serving whatever
//! state the store was in before the failed load.

use stayfinder_db::DbError;

/// Errors that can occur during a batch load.
///
/// Per-element parse failures are not represented here; they are
/// recovered locally inside the loader (skip-and-count) and reported
/// through the [`LoadReport`](crate::LoadReport) counters.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The input JSON resource is missing from disk.
    #[error("property resource not found: {0}")]
    ResourceNotFound(String),

    /// The resource exists but could not be read.
    #[error("failed to read property resource: {0}")]
    Io(#[from] std::io::Error),

    /// The top-level JSON shape is wrong: the document is not an
    /// object, or `properties` is missing or not an array.
    #[error("malformed property document: {0}")]
    MalformedInput(String),

    /// The storage engine rejected the batch write; the whole batch
    /// was rolled back.
    #[error("storage error: {0}")]
    Storage(#[from] DbError),
}
