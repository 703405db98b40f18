//! Loader configuration.
//!
//! Deserializable so the server binary can embed it as the `loader`
//! section of the service YAML config. All fields are defaulted.

use serde::Deserialize;

/// Configuration for the startup batch loader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    /// Whether the loader runs at startup. When disabled the loader
    /// returns immediately without touching the store.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Concurrency hint carried over from the deployment surface.
    ///
    /// The load is strictly sequential; this value is stored and
    /// logged but has no effect on behavior.
    #[serde(default = "default_concurrent_threads")]
    pub concurrent_threads: u32,

    /// Filesystem path of the JSON property document.
    #[serde(default = "default_resource")]
    pub resource: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            concurrent_threads: default_concurrent_threads(),
            resource: default_resource(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_concurrent_threads() -> u32 {
    10
}

fn default_resource() -> String {
    "data/propertyFiles.json".to_owned()
}
