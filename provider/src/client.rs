//! The provider HTTP client.

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::records::{HistoryMatch, HistoryResponse, MatchRecord};

use chrono::{DateTime, Duration, Utc};
use reqwest::header::AUTHORIZATION;
use tournify_types::PlayerIdentity;

/// Client for the match-history provider.
///
/// Cheap to clone: the underlying connection pool is shared between clones,
/// which is what lets one request's fan-out reuse connections without
/// leaking them across requests.
#[derive(Clone)]
pub struct ProviderClient {
    http_client: reqwest::Client,
    config: ProviderConfig,
}

impl ProviderClient {
    /// Build a client from explicit settings. Timeouts are baked into the
    /// underlying `reqwest::Client` so every call inherits them.
    pub fn new(config: ProviderConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            config,
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn authorized_get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.http_client.get(url);
        if let Some(ref key) = self.config.api_key {
            // The provider expects the bare key, no "Bearer" prefix.
            request = request.header(AUTHORIZATION, key.as_str());
        }
        request
    }

    /// Fetch the identifiers of a player's recent matches, newest-first as
    /// reported by the provider, with entries older than the recency window
    /// dropped.
    ///
    /// Errors are tagged rather than swallowed here; the aggregation layer
    /// decides that a failed lookup counts as an empty history.
    pub async fn recent_match_ids(
        &self,
        player: &PlayerIdentity,
    ) -> Result<Vec<String>, ProviderError> {
        let url = format!(
            "{}/history/{}/{}/{}/{}",
            self.base_url(),
            player.region,
            player.platform,
            player.name,
            player.tag
        );

        let response = self
            .authorized_get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "HTTP status {} from history endpoint",
                response.status()
            )));
        }

        let history: HistoryResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse history response: {e}"))
        })?;

        Ok(filter_recent(
            history.matches,
            Utc::now(),
            self.config.history_window_days,
        ))
    }

    /// Fetch the canonical record for one match.
    ///
    /// Unlike history lookups, a failure here is the caller's problem:
    /// without the canonical record no verification can happen.
    pub async fn match_record(&self, match_id: &str) -> Result<MatchRecord, ProviderError> {
        let url = format!("{}/match/{}", self.base_url(), match_id);

        let response = self
            .authorized_get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "HTTP status {} for match {}",
                response.status(),
                match_id
            )));
        }

        response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse match record: {e}"))
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        ProviderError::Unreachable(format!("connection failed: {e}"))
    } else {
        ProviderError::RequestFailed(e.to_string())
    }
}

/// Keep only entries inside the recency window, preserving provider order.
fn filter_recent(
    matches: Vec<HistoryMatch>,
    now: DateTime<Utc>,
    window_days: i64,
) -> Vec<String> {
    let cutoff = now - Duration::days(window_days);
    matches
        .into_iter()
        .filter(|entry| entry.started_at >= cutoff)
        .map(|entry| entry.match_id)
        .collect()
}
