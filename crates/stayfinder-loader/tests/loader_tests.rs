//! Integration tests for the startup batch loader.
//!
//! Tests drive [`stayfinder_loader::run`] end to end against an
//! in-memory `SQLite` database. Document fixtures are written to the
//! OS temp directory; no external services are required.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::items_after_statements,
    clippy::missing_panics_doc,
    clippy::indexing_slicing
)]

use std::path::PathBuf;

use stayfinder_db::{DatabasePool, PropertyStore};
use stayfinder_loader::{LoaderConfig, LoaderError, parse_document, run};

async fn setup_pool() -> DatabasePool {
    let pool = DatabasePool::connect_memory()
        .await
        .expect("Failed to open in-memory SQLite");
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    pool
}

/// Write a fixture document to the OS temp directory and return a
/// loader config pointing at it.
fn write_fixture(name: &str, contents: &str) -> (LoaderConfig, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "stayfinder-loader-test-{}-{name}.json",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("Failed to write fixture");
    let config = LoaderConfig {
        resource: path.to_string_lossy().into_owned(),
        ..LoaderConfig::default()
    };
    (config, path)
}

const WELL_FORMED: &str = r#"{
    "properties": [
        {
            "id": 1,
            "propertyName": "Test Resort",
            "propertyLocation": "beachfront",
            "propertyCity": "Miami",
            "propertyState": "FL",
            "propertyCountry": "USA",
            "propertyAddress": "100 Ocean Dr",
            "propertyPhoneNumber": "305-555-0100",
            "propertyEmailAddress": "front@resort.example",
            "propertyAirportProximity": "15 min from MIA",
            "propertyDescription": "Ocean views from every room.",
            "propertyPricePerNight": "249.00",
            "propertyCommissionAmount": "24.90",
            "propertyCancellationPenalty": "75.00"
        },
        { "id": 2, "propertyName": "Harbor Inn", "propertyCity": "Portland" },
        { "id": 3 }
    ]
}"#;

// =============================================================================
// Round-trip Tests
// =============================================================================

#[tokio::test]
async fn well_formed_document_round_trips() {
    let pool = setup_pool().await;
    let (config, path) = write_fixture("round-trip", WELL_FORMED);

    let report = run(&config, &pool).await.expect("Load failed");
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 0);

    let store = PropertyStore::new(pool.pool());
    assert_eq!(store.count().await.expect("Count failed"), 3);

    let all = store.find_all().await.expect("Query failed");
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].property_name, "Test Resort");
    assert_eq!(all[0].property_city, "Miami");
    assert_eq!(all[0].property_price_per_night, "249.00");

    // Absent sub-fields default to empty strings.
    assert_eq!(all[1].property_name, "Harbor Inn");
    assert_eq!(all[1].property_state, "");
    assert_eq!(all[2].property_name, "");

    std::fs::remove_file(path).ok();
    pool.close().await;
}

#[tokio::test]
async fn malformed_elements_are_skipped_and_counted() {
    let pool = setup_pool().await;
    let (config, path) = write_fixture(
        "skip-and-count",
        r#"{
            "properties": [
                { "id": 1, "propertyName": "Good One" },
                { "propertyName": "No Id" },
                { "id": 2, "propertyName": "Good Two" },
                { "id": "not-a-number" },
                { "id": 3, "propertyName": "Good Three" }
            ]
        }"#,
    );

    let report = run(&config, &pool).await.expect("Load failed");
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 2);

    let store = PropertyStore::new(pool.pool());
    assert_eq!(store.count().await.expect("Count failed"), 3);

    std::fs::remove_file(path).ok();
    pool.close().await;
}

// =============================================================================
// Failure Semantics Tests
// =============================================================================

#[tokio::test]
async fn missing_resource_is_reported_and_store_untouched() {
    let pool = setup_pool().await;
    let config = LoaderConfig {
        resource: "/nonexistent/stayfinder/propertyFiles.json".to_owned(),
        ..LoaderConfig::default()
    };

    let result = run(&config, &pool).await;
    assert!(matches!(result, Err(LoaderError::ResourceNotFound(_))));

    let store = PropertyStore::new(pool.pool());
    assert_eq!(store.count().await.expect("Count failed"), 0);

    pool.close().await;
}

#[tokio::test]
async fn properties_field_must_be_an_array() {
    let pool = setup_pool().await;
    let (config, path) = write_fixture("not-an-array", r#"{ "properties": { "id": 1 } }"#);

    let result = run(&config, &pool).await;
    assert!(matches!(result, Err(LoaderError::MalformedInput(_))));

    let store = PropertyStore::new(pool.pool());
    assert_eq!(store.count().await.expect("Count failed"), 0);

    std::fs::remove_file(path).ok();
    pool.close().await;
}

#[tokio::test]
async fn missing_properties_field_is_malformed() {
    let pool = setup_pool().await;
    let (config, path) = write_fixture("missing-field", r#"{ "listings": [] }"#);

    let result = run(&config, &pool).await;
    assert!(matches!(result, Err(LoaderError::MalformedInput(_))));

    std::fs::remove_file(path).ok();
    pool.close().await;
}

#[tokio::test]
async fn storage_rejection_rolls_back_the_whole_batch() {
    let pool = setup_pool().await;
    let store = PropertyStore::new(pool.pool());

    // Pre-existing row whose id collides with the document below.
    store
        .save(&stayfinder_types::Property {
            id: 2,
            property_name: "Pre-existing".to_owned(),
            ..stayfinder_types::Property::default()
        })
        .await
        .expect("Seed save failed");

    let (config, path) = write_fixture(
        "rollback",
        r#"{
            "properties": [
                { "id": 1, "propertyName": "First" },
                { "id": 2, "propertyName": "Collides" }
            ]
        }"#,
    );

    let result = run(&config, &pool).await;
    assert!(matches!(result, Err(LoaderError::Storage(_))));

    // None of the batch is visible; the pre-existing row is intact.
    assert_eq!(store.count().await.expect("Count failed"), 1);
    let all = store.find_all().await.expect("Query failed");
    assert_eq!(all[0].property_name, "Pre-existing");

    std::fs::remove_file(path).ok();
    pool.close().await;
}

#[tokio::test]
async fn disabled_loader_persists_nothing() {
    let pool = setup_pool().await;
    let (config, path) = write_fixture("disabled", WELL_FORMED);
    let config = LoaderConfig {
        enabled: false,
        ..config
    };

    let report = run(&config, &pool).await.expect("Disabled run should succeed");
    assert_eq!(report.loaded, 0);
    assert_eq!(report.skipped, 0);

    let store = PropertyStore::new(pool.pool());
    assert_eq!(store.count().await.expect("Count failed"), 0);

    std::fs::remove_file(path).ok();
    pool.close().await;
}

// =============================================================================
// Document Parsing Tests
// =============================================================================

#[test]
fn parse_document_tolerates_scalar_coercion() {
    let batch = parse_document(
        r#"{
            "properties": [
                {
                    "id": 9,
                    "propertyName": "Numeric Fields",
                    "propertyPricePerNight": 189.5,
                    "propertyCommissionAmount": 19,
                    "propertyCancellationPenalty": null
                }
            ]
        }"#,
    )
    .expect("Parse failed");

    assert_eq!(batch.errors, 0);
    assert_eq!(batch.properties.len(), 1);
    assert_eq!(batch.properties[0].property_price_per_night, "189.5");
    assert_eq!(batch.properties[0].property_commission_amount, "19");
    assert_eq!(batch.properties[0].property_cancellation_penalty, "");
}

#[test]
fn parse_document_rejects_non_object_root() {
    let result = parse_document(r#"[1, 2, 3]"#);
    assert!(matches!(result, Err(LoaderError::MalformedInput(_))));
}
