//! Configuration loading and typed config structures for the service.
//!
//! The canonical configuration lives in `stayfinder-config.yaml` at
//! the working directory. This module defines strongly-typed structs
//! that mirror the YAML structure and provides a loader that reads the
//! file. Every field is defaulted, so a missing file or an empty
//! document yields a runnable configuration.

use std::path::Path;

use serde::Deserialize;
use stayfinder_loader::LoaderConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `stayfinder-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseSettings,

    /// HTTP server settings.
    #[serde(default)]
    pub server: HttpSettings,

    /// Startup loader settings.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ServiceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `DATABASE_URL` environment variable overrides
    /// `database.url`, so deployments can point at a different store
    /// without editing the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let parsed: Option<Self> = serde_yml::from_str(yaml)?;
        let mut config = parsed.unwrap_or_default();
        config.database.apply_env_overrides();
        Ok(config)
    }
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSettings {
    /// `SQLite` connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// Override the database URL with `DATABASE_URL` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DATABASE_URL") {
            self.url = val;
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpSettings {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins
    /// when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_database_url() -> String {
    "sqlite://stayfinder.db".to_owned()
}

const fn default_max_connections() -> u32 {
    5
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ServiceConfig::default();
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server.port, 8080);
        assert!(config.loader.enabled);
        assert_eq!(config.loader.concurrent_threads, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
database:
  url: "sqlite://test.db"
  max_connections: 2

server:
  host: "127.0.0.1"
  port: 9090

loader:
  enabled: false
  concurrent_threads: 4
  resource: "fixtures/listings.json"

logging:
  level: "debug"
"#;

        let config = ServiceConfig::parse(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert!(!config.loader.enabled);
        assert_eq!(config.loader.concurrent_threads, 4);
        assert_eq!(config.loader.resource, "fixtures/listings.json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "server:\n  port: 3000\n";
        let config = ServiceConfig::parse(yaml).unwrap();

        // Port is overridden
        assert_eq!(config.server.port, 3000);
        // Everything else uses defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.loader.enabled);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = ServiceConfig::parse("");
        assert!(config.is_ok());
    }
}
