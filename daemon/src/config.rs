//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};

/// Configuration for the Tournify API daemon.
///
/// Can be loaded from a TOML file or built from CLI flags; the daemon turns
/// the provider fields into an explicit `ProviderConfig` so nothing below
/// the entry point reads ambient state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Port the match API listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the upstream match-history provider.
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    /// API key for the provider, sent verbatim in `Authorization`.
    #[serde(default)]
    pub provider_api_key: Option<String>,

    /// Per-request provider timeout in seconds.
    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            provider_url: default_provider_url(),
            provider_api_key: None,
            provider_timeout_secs: default_provider_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_port() -> u16 {
    8000
}

fn default_provider_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

fn default_provider_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}
