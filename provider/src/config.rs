//! Provider connection settings.

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default history recency window, in days.
pub const DEFAULT_HISTORY_WINDOW_DAYS: i64 = 30;

/// Connection settings for the upstream match-history provider.
///
/// Built once at startup and handed to [`crate::ProviderClient::new`];
/// nothing downstream reads connection state from the environment.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// Base URL of the provider API.
    pub base_url: String,
    /// API key sent verbatim in the `Authorization` header, if any.
    pub api_key: Option<String>,
    /// Hard cap on each request, timeouts included in normal failure flow.
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// History entries older than this many days are dropped at the client.
    pub history_window_days: i64,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            history_window_days: DEFAULT_HISTORY_WINDOW_DAYS,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = ProviderConfig::new("http://localhost:8001");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.history_window_days, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = ProviderConfig::new("http://localhost:8001")
            .with_api_key("HDEV-secret")
            .with_request_timeout(Duration::from_secs(3));
        assert_eq!(config.api_key.as_deref(), Some("HDEV-secret"));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }
}
