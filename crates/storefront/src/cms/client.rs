//! Content provider API client implementation.
//!
//! Talks to the provider's Pages API with `reqwest` and caches responses
//! using `moka` (5-minute TTL). The auth token travels as the `auth_token`
//! query parameter on every request.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::cms::CmsError;
use crate::cms::cache::CacheValue;
use crate::cms::types::{Page, PageResponse, PagesResponse};
use crate::config::CmsConfig;

/// Page type under which products are published.
const PRODUCT_PAGE_TYPE: &str = "product";

/// Client for the content provider's Pages API.
///
/// Provides typed access to the product catalog. Listings and single-page
/// lookups are cached for 5 minutes.
#[derive(Clone)]
pub struct CmsClient {
    inner: Arc<CmsClientInner>,
}

struct CmsClientInner {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
    cache: Cache<String, CacheValue>,
}

impl CmsClient {
    /// Create a new content provider client.
    #[must_use]
    pub fn new(config: &CmsConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CmsClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                auth_token: config.auth_token.expose_secret().to_string(),
                cache,
            }),
        }
    }

    /// Issue a GET against a Pages API path and decode the JSON body.
    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, CmsError> {
        let url = format!("{}{path}", self.inner.base_url);

        let response = self
            .inner
            .client
            .get(&url)
            .query(&[("auth_token", self.inner.auth_token.as_str())])
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "content API returned non-success status"
            );
            return Err(CmsError::Api {
                status: status.as_u16(),
                body: response_text,
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(decoded) => Ok(decoded),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "failed to parse content API response"
                );
                Err(CmsError::Parse(e))
            }
        }
    }

    /// List all published product pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider request fails or the body does not
    /// decode. No retry, no partial result.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Page>, CmsError> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Pages(pages)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for product listing");
            return Ok(pages);
        }

        let listing: PagesResponse = self.fetch(&format!("/pages/{PRODUCT_PAGE_TYPE}")).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Pages(listing.data.clone()))
            .await;

        Ok(listing.data)
    }

    /// Resolve a single product page by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the page does not exist (the provider answers with
    /// a non-success status) or the request fails.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn get_product(&self, name: &str) -> Result<Page, CmsError> {
        let cache_key = format!("product:{name}");

        if let Some(CacheValue::Page(page)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for product");
            return Ok(*page);
        }

        let lookup: PageResponse = self
            .fetch(&format!("/pages/{PRODUCT_PAGE_TYPE}/{name}"))
            .await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Page(Box::new(lookup.data.clone())))
            .await;

        Ok(lookup.data)
    }
}
