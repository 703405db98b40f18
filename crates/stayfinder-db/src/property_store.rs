//! Property store operations: the persistence gateway for the service.
//!
//! The store owns the mapping between an in-memory
//! [`Property`] and a row in the `property` table. It has no logic of
//! its own beyond delegation to `SQLite`: an idempotent single-row
//! upsert, an all-or-nothing batch insert, and the two reads the query
//! layer needs.

use sqlx::SqlitePool;
use stayfinder_types::Property;

use crate::error::DbError;

/// Column list shared by the insert statements.
const PROPERTY_COLUMNS: &str = "id, property_name, property_location, property_city, \
     property_state, property_country, property_address, property_phone_number, \
     property_email_address, property_airport_proximity, property_description, \
     property_price_per_night, property_commission_amount, property_cancellation_penalty";

/// Operations on the `property` table.
pub struct PropertyStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PropertyStore<'a> {
    /// Create a new property store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace a single property, keyed by `id`.
    ///
    /// The operation is an idempotent upsert: saving the same record
    /// twice leaves one row. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the engine rejects the write.
    pub async fn save(&self, property: &Property) -> Result<Property, DbError> {
        bind_property(
            sqlx::query(&format!(
                "INSERT INTO property ({PROPERTY_COLUMNS})
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                 ON CONFLICT(id) DO UPDATE SET
                     property_name = excluded.property_name,
                     property_location = excluded.property_location,
                     property_city = excluded.property_city,
                     property_state = excluded.property_state,
                     property_country = excluded.property_country,
                     property_address = excluded.property_address,
                     property_phone_number = excluded.property_phone_number,
                     property_email_address = excluded.property_email_address,
                     property_airport_proximity = excluded.property_airport_proximity,
                     property_description = excluded.property_description,
                     property_price_per_night = excluded.property_price_per_night,
                     property_commission_amount = excluded.property_commission_amount,
                     property_cancellation_penalty = excluded.property_cancellation_penalty"
            )),
            property,
        )
        .execute(self.pool)
        .await?;

        tracing::debug!(id = property.id, "Saved property");
        Ok(property.clone())
    }

    /// Insert a batch of properties as one atomic unit.
    ///
    /// All rows are written inside a single transaction: either every
    /// record commits or none do. Inserts are strict (no upsert), so a
    /// duplicate `id` against a pre-existing row fails the whole batch
    /// and the transaction rolls back on drop.
    ///
    /// Returns the number of rows written. An empty batch is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] carrying the original cause if any
    /// row is rejected.
    pub async fn save_all(&self, properties: &[Property]) -> Result<u64, DbError> {
        if properties.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut written: u64 = 0;

        for property in properties {
            bind_property(
                sqlx::query(&format!(
                    "INSERT INTO property ({PROPERTY_COLUMNS})
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
                )),
                property,
            )
            .execute(&mut *tx)
            .await?;
            written = written.saturating_add(1);
        }

        tx.commit().await?;

        tracing::debug!(count = written, "Inserted properties (atomic batch)");
        Ok(written)
    }

    /// Return every property in the store, ordered by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Property>, DbError> {
        let rows = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM property ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Property::from).collect())
    }

    /// Return the current row count. Side-effect free.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM property")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

/// Bind all fourteen property fields to a query in column order.
fn bind_property<'q>(
    query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    property: &'q Property,
) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    query
        .bind(property.id)
        .bind(&property.property_name)
        .bind(&property.property_location)
        .bind(&property.property_city)
        .bind(&property.property_state)
        .bind(&property.property_country)
        .bind(&property.property_address)
        .bind(&property.property_phone_number)
        .bind(&property.property_email_address)
        .bind(&property.property_airport_proximity)
        .bind(&property.property_description)
        .bind(&property.property_price_per_night)
        .bind(&property.property_commission_amount)
        .bind(&property.property_cancellation_penalty)
}

/// A row from the `property` table.
///
/// Uses runtime types rather than compile-time checked types to avoid
/// requiring a live database during builds.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PropertyRow {
    /// Primary key.
    pub id: i64,
    /// Display name.
    pub property_name: String,
    /// Location category label.
    pub property_location: String,
    /// City.
    pub property_city: String,
    /// State or province.
    pub property_state: String,
    /// Country.
    pub property_country: String,
    /// Street address.
    pub property_address: String,
    /// Contact phone number.
    pub property_phone_number: String,
    /// Contact email address.
    pub property_email_address: String,
    /// Airport proximity note.
    pub property_airport_proximity: String,
    /// Free-text description.
    pub property_description: String,
    /// Nightly rate as text.
    pub property_price_per_night: String,
    /// Commission amount as text.
    pub property_commission_amount: String,
    /// Cancellation penalty as text.
    pub property_cancellation_penalty: String,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Self {
            id: row.id,
            property_name: row.property_name,
            property_location: row.property_location,
            property_city: row.property_city,
            property_state: row.property_state,
            property_country: row.property_country,
            property_address: row.property_address,
            property_phone_number: row.property_phone_number,
            property_email_address: row.property_email_address,
            property_airport_proximity: row.property_airport_proximity,
            property_description: row.property_description,
            property_price_per_night: row.property_price_per_night,
            property_commission_amount: row.property_commission_amount,
            property_cancellation_penalty: row.property_cancellation_penalty,
        }
    }
}
