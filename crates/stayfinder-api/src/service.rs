//! Read-only query facade over the persistence gateway.
//!
//! [`PropertyService`] is the stateless pass-through the transport
//! layer calls: `list_all` and `count` delegate directly to
//! [`PropertyStore`] with no caching,
//! filtering, or pagination. Every call re-reads the authoritative
//! store.

use stayfinder_db::{DatabasePool, DbError, PropertyStore};
use stayfinder_types::Property;

/// Stateless query service over the property store.
#[derive(Debug, Clone)]
pub struct PropertyService {
    pool: DatabasePool,
}

impl PropertyService {
    /// Create a new service bound to a connection pool.
    pub const fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Return every property in the store.
    ///
    /// # Errors
    ///
    /// Propagates [`DbError`] from the store unchanged.
    pub async fn list_all(&self) -> Result<Vec<Property>, DbError> {
        PropertyStore::new(self.pool.pool()).find_all().await
    }

    /// Return the current property count.
    ///
    /// # Errors
    ///
    /// Propagates [`DbError`] from the store unchanged.
    pub async fn count(&self) -> Result<i64, DbError> {
        PropertyStore::new(self.pool.pool()).count().await
    }
}
