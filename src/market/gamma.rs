//! Gamma API client for the market listing
//!
//! Pulls one page of active, non-closed markets per request from
//! Polymarket's Gamma `/markets` endpoint.

use super::{MarketRecord, MarketSource, PageQuery, SourceError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Gamma API base URL
pub const GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";

/// Configuration for the Gamma client
#[derive(Debug, Clone)]
pub struct GammaConfig {
    /// Base URL for the Gamma API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self {
            base_url: GAMMA_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for Polymarket's Gamma API
pub struct GammaClient {
    config: GammaConfig,
    client: Client,
}

impl GammaClient {
    /// Create a new Gamma API client with default configuration
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(GammaConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: GammaConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self { config, client })
    }

    fn markets_url(&self) -> String {
        format!("{}/markets", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MarketSource for GammaClient {
    async fn fetch_page(&self, query: PageQuery) -> Result<Vec<MarketRecord>, SourceError> {
        let url = self.markets_url();
        let unavailable = |reason: String| SourceError::Unavailable {
            offset: query.offset,
            reason,
        };

        tracing::debug!(url = %url, limit = query.limit, offset = query.offset, "Fetching market page");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("limit", query.limit.to_string()),
                ("offset", query.offset.to_string()),
                ("active", "true".to_string()),
                ("closed", "false".to_string()),
            ])
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(unavailable(format!("HTTP {} - {}", status, body)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        parse_page(&body, query.offset)
    }
}

/// Decode a listing page body into records
///
/// Gamma returns a bare array; older deployments wrap it as
/// `{"markets": [...]}`. Every element must be a market object.
fn parse_page(body: &str, offset: usize) -> Result<Vec<MarketRecord>, SourceError> {
    let malformed = |reason: String| SourceError::MalformedResponse { offset, reason };

    let page: Value = serde_json::from_str(body).map_err(|e| malformed(e.to_string()))?;
    let listing = match page {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut object) => match object.remove("markets") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(markets) => markets,
        },
        other => {
            return Err(malformed(format!(
                "expected a market array or object, got {}",
                other
            )))
        }
    };

    serde_json::from_value(listing).map_err(|e| malformed(e.to_string()))
}
