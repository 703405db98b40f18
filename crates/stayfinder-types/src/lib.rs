//! Shared type definitions for the Stayfinder property service.
//!
//! This crate is the single source of truth for the entity types used
//! across the Stayfinder workspace. The loader builds them from JSON,
//! the data layer persists them, and the read API serializes them back
//! out unchanged.
//!
//! # Modules
//!
//! - [`property`] -- The `Property` listing entity

pub mod property;

// Re-export the primary type at crate root for convenience.
pub use property::Property;
