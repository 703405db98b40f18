//! Service binary for the Stayfinder property service.
//!
//! This is the main entry point that wires together configuration,
//! the database pool, the one-shot startup loader, and the query API
//! server.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `stayfinder-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Connect the `SQLite` pool and run migrations
//! 4. Run the property loader once (failures are logged, never fatal)
//! 5. Serve the query API until the process is terminated
//!
//! The load completes before the listener starts; a query can only
//! ever observe the store before or after the atomic batch, never a
//! partial one.

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use stayfinder_api::{AppState, ServerConfig};
use stayfinder_db::{DatabaseConfig, DatabasePool};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Application entry point for the service.
///
/// # Errors
///
/// Returns an error if configuration, database startup, or the HTTP
/// server fails. A failed data load is not an error: the service
/// starts with whatever the store already holds.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the
    //    configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("stayfinder-server starting");
    info!(
        host = %config.server.host,
        port = config.server.port,
        loader_enabled = config.loader.enabled,
        concurrent_threads = config.loader.concurrent_threads,
        resource = %config.loader.resource,
        "Configuration loaded"
    );

    // 3. Connect the database pool and run migrations.
    let db_config = DatabaseConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections);
    let pool = DatabasePool::connect(&db_config)
        .await
        .map_err(ServiceError::from)?;
    pool.run_migrations().await.map_err(ServiceError::from)?;

    // 4. Run the startup loader. All loader failures are non-fatal:
    //    the worst outcome is an empty dataset with a logged diagnosis.
    match stayfinder_loader::run(&config.loader, &pool).await {
        Ok(report) => info!(
            loaded = report.loaded,
            skipped = report.skipped,
            "Startup load finished"
        ),
        Err(e) => error!(error = %e, "Startup load failed, serving existing data"),
    }

    // 5. Serve the query API.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let state = Arc::new(AppState::new(pool));

    stayfinder_api::start_server(&server_config, state)
        .await
        .map_err(ServiceError::from)?;

    info!("stayfinder-server shutdown complete");
    Ok(())
}

/// Load the service configuration from `stayfinder-config.yaml`.
///
/// Looks for the config file relative to the current working
/// directory; when it is absent, defaults are used.
fn load_config() -> Result<ServiceConfig, ServiceError> {
    let config_path = Path::new("stayfinder-config.yaml");
    if config_path.exists() {
        let config = ServiceConfig::from_file(config_path)?;
        Ok(config)
    } else {
        let mut config = ServiceConfig::default();
        config.database.apply_env_overrides();
        Ok(config)
    }
}
