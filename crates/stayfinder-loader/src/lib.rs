//! Startup batch loader for the Stayfinder property service.
//!
//! Runs once per process lifetime: reads the JSON property document,
//! converts each array element into a [`stayfinder_types::Property`]
//! with skip-and-count error handling, and persists the full batch
//! through one atomic write. Every failure mode is non-fatal to the
//! hosting server.
//!
//! # Modules
//!
//! - [`config`] -- Loader configuration (enable flag, concurrency hint,
//!   resource path)
//! - [`loader`] -- Parse and load operations plus the [`LoadReport`]
//! - [`error`] -- Shared error types

pub mod config;
pub mod error;
pub mod loader;

// Re-export primary types for convenience.
pub use config::LoaderConfig;
pub use error::LoaderError;
pub use loader::{LoadReport, ParsedBatch, parse_document, run};
