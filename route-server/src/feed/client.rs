//! Trip-planning API client.
//!
//! Fetches route candidates for a destination from an HTTP trip feed.
//! The wire format is the same loose record dialect the demo feed uses,
//! so the serde aliases on `RouteRecord` do the field mapping.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::domain::RouteRecord;

use super::error::FeedError;

/// Default base URL for the trip feed (a local development instance;
/// deployments set `ROUTE_FEED_URL`).
const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Configuration for the trip feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// API key for x-apikey header authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the trip-planning API.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| FeedError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-apikey"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch route candidates for a destination.
    pub async fn fetch_routes(&self, destination: &str) -> Result<Vec<RouteRecord>, FeedError> {
        let url = format!("{}/routes", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("destination", destination)])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(FeedError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let records: Vec<RouteRecord> =
            serde_json::from_str(&body).map_err(|e| FeedError::Json {
                message: e.to_string(),
            })?;

        Ok(records)
    }
}
