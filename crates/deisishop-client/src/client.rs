//! HTTP client for the DEISI Shop REST API.
//!
//! The read endpoints follow the storefront's degradation contract: callers
//! never need to handle an explicit error for `fetch_products` or
//! `fetch_categories`, because a failed or malformed response yields an
//! empty list and a `tracing` warning. Checkout lives in [`crate::checkout`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use deisishop_core::{Product, ShopConfig};

use crate::error::ClientError;
use crate::normalize::{normalize_category, normalize_product};

/// Client for the DEISI Shop REST API.
///
/// Use [`ShopClient::new`] with the loaded [`ShopConfig`] for production or
/// [`ShopClient::with_base_url`] to point at a mock server in tests.
pub struct ShopClient {
    pub(crate) client: Client,
    base_url: Url,
}

impl ShopClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: &ShopConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so endpoint paths append to
        // the root rather than replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches and normalizes the full product catalog.
    ///
    /// Never fails: non-2xx statuses, transport failures and malformed
    /// payloads all degrade to an empty list. Array entries that are not
    /// JSON objects are dropped; objects with missing or malformed fields
    /// are normalized with the documented defaults.
    pub async fn fetch_products(&self) -> Vec<Product> {
        match self.get_json("products/").await {
            Ok(Value::Array(entries)) => entries.iter().filter_map(normalize_product).collect(),
            Ok(_) => {
                tracing::warn!("products payload is not an array, treating catalog as empty");
                Vec::new()
            }
            Err(error) => {
                tracing::warn!(error = %error, "products fetch failed, treating catalog as empty");
                Vec::new()
            }
        }
    }

    /// Fetches the category list.
    ///
    /// Same degradation contract as [`ShopClient::fetch_products`]. Entries
    /// are coerced to strings and empty ones filtered out; the caller is
    /// responsible for falling back to catalog-derived categories when the
    /// result is empty (see [`deisishop_core::fallback_categories`]).
    pub async fn fetch_categories(&self) -> Vec<String> {
        match self.get_json("categories/").await {
            Ok(Value::Array(entries)) => entries.iter().filter_map(normalize_category).collect(),
            Ok(_) => {
                tracing::warn!("categories payload is not an array, treating list as empty");
                Vec::new()
            }
            Err(error) => {
                tracing::warn!(error = %error, "categories fetch failed, treating list as empty");
                Vec::new()
            }
        }
    }

    /// Joins an endpoint path onto the normalised base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on network failure or a non-2xx status,
    /// and [`ClientError::Deserialize`] if the body is not valid JSON.
    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let url = self.endpoint(path);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: url,
            source: e,
        })
    }
}
