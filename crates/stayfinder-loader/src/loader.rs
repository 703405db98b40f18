//! Single-pass parse-and-insert of the property document.
//!
//! The loader turns a static JSON resource into persisted
//! [`Property`] records exactly once per process lifetime. The
//! document has the shape:
//!
//! ```json
//! { "properties": [ { "id": 1, "propertyName": "...", ... }, ... ] }
//! ```
//!
//! A bad element never aborts the batch: it is skipped, counted, and
//! (for the first few) logged in detail. The batch insert itself is
//! all-or-nothing; a rejected write rolls every row back and is
//! surfaced to the caller, who treats it as non-fatal.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;
use stayfinder_db::{DatabasePool, PropertyStore};
use stayfinder_types::Property;

use crate::config::LoaderConfig;
use crate::error::LoaderError;

/// How many element parse failures are logged with full detail.
const MAX_LOGGED_PARSE_ERRORS: usize = 5;

/// How many accepted records are echoed at debug level.
const MAX_DEBUGGED_RECORDS: usize = 3;

/// Aggregate counters for one load run.
///
/// Local accumulators returned from the load function; the loader
/// keeps no process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records persisted.
    pub loaded: usize,
    /// Number of array elements skipped due to parse errors.
    pub skipped: usize,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

/// The records built from one document plus the per-element error count.
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    /// Successfully converted records, in document order.
    pub properties: Vec<Property>,
    /// Number of elements that failed conversion and were skipped.
    pub errors: usize,
}

/// Expected top-level document shape.
///
/// A typed parse replaces the dynamic tree walk: a missing
/// `properties` field or a non-array value is a deserialization error,
/// reported as [`LoaderError::MalformedInput`].
#[derive(Debug, Deserialize)]
struct PropertyDocument {
    properties: Vec<serde_json::Value>,
}

/// Lenient per-element shape.
///
/// Only `id` is required. Every other field defaults to an empty
/// string when absent or null, and scalar non-string values are
/// rendered as their text form, mirroring how the document treats all
/// attributes as display text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProperty {
    id: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    property_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_city: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_state: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_country: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_address: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_phone_number: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_email_address: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_airport_proximity: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_price_per_night: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_commission_amount: String,
    #[serde(default, deserialize_with = "lenient_text")]
    property_cancellation_penalty: String,
}

impl From<RawProperty> for Property {
    fn from(raw: RawProperty) -> Self {
        Self {
            id: raw.id,
            property_name: raw.property_name,
            property_location: raw.property_location,
            property_city: raw.property_city,
            property_state: raw.property_state,
            property_country: raw.property_country,
            property_address: raw.property_address,
            property_phone_number: raw.property_phone_number,
            property_email_address: raw.property_email_address,
            property_airport_proximity: raw.property_airport_proximity,
            property_description: raw.property_description,
            property_price_per_night: raw.property_price_per_night,
            property_commission_amount: raw.property_commission_amount,
            property_cancellation_penalty: raw.property_cancellation_penalty,
        }
    }
}

/// Accept a string, render other scalars as text, and default
/// everything else (absent, null, containers) to an empty string.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Parse a property document into records, tolerating bad elements.
///
/// Validates the top-level shape, then converts each array element in
/// order. An element that fails (e.g. a missing `id`) increments the
/// error counter and the batch continues.
///
/// # Errors
///
/// Returns [`LoaderError::MalformedInput`] if the document is not an
/// object with a `properties` array.
pub fn parse_document(json: &str) -> Result<ParsedBatch, LoaderError> {
    let document: PropertyDocument =
        serde_json::from_str(json).map_err(|e| LoaderError::MalformedInput(e.to_string()))?;

    tracing::info!(
        elements = document.properties.len(),
        "Parsed property document"
    );

    let mut batch = ParsedBatch::default();
    for element in document.properties {
        match serde_json::from_value::<RawProperty>(element) {
            Ok(raw) => {
                let property = Property::from(raw);
                if batch.properties.len() < MAX_DEBUGGED_RECORDS {
                    tracing::debug!(
                        id = property.id,
                        name = %property.property_name,
                        "Accepted property"
                    );
                }
                batch.properties.push(property);
            }
            Err(e) => {
                batch.errors = batch.errors.saturating_add(1);
                if batch.errors <= MAX_LOGGED_PARSE_ERRORS {
                    tracing::warn!(error = %e, "Skipping unparseable property element");
                }
            }
        }
    }

    Ok(batch)
}

/// Run one batch load: read the resource, build records, persist them
/// atomically, and report aggregate counters.
///
/// When the loader is disabled the function returns an empty report
/// without touching the store. All error paths leave the store in
/// whatever state existed before the failed batch; the caller decides
/// whether that is fatal (it never is for the server binary).
///
/// # Errors
///
/// Returns [`LoaderError::ResourceNotFound`] if the document is
/// missing, [`LoaderError::MalformedInput`] on a bad top-level shape,
/// and [`LoaderError::Storage`] if the batch write is rejected (the
/// whole batch is rolled back; no retry is attempted).
pub async fn run(config: &LoaderConfig, pool: &DatabasePool) -> Result<LoadReport, LoaderError> {
    if !config.enabled {
        tracing::info!("Property loader disabled, skipping load");
        return Ok(LoadReport::default());
    }

    let start = Instant::now();
    tracing::info!(resource = %config.resource, "Starting property data load");

    let path = Path::new(&config.resource);
    if !path.exists() {
        return Err(LoaderError::ResourceNotFound(config.resource.clone()));
    }

    let contents = std::fs::read_to_string(path)?;
    let batch = parse_document(&contents)?;

    tracing::info!(
        parsed = batch.properties.len(),
        errors = batch.errors,
        "Converted property elements"
    );

    if !batch.properties.is_empty() {
        let store = PropertyStore::new(pool.pool());
        store.save_all(&batch.properties).await?;
    }

    let report = LoadReport {
        loaded: batch.properties.len(),
        skipped: batch.errors,
        elapsed: start.elapsed(),
    };

    tracing::info!(
        loaded = report.loaded,
        skipped = report.skipped,
        elapsed_ms = u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
        "Property load complete"
    );

    Ok(report)
}
