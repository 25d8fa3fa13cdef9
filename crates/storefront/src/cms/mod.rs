//! Content provider API client.
//!
//! # Architecture
//!
//! - The content provider is the system of record for product data; the
//!   storefront never mutates it and performs no local sync.
//! - Products are published as pages of a fixed page type, fetched over the
//!   provider's JSON Pages API with `reqwest`.
//! - In-memory caching via `moka` for API responses (5 minute TTL).
//!
//! # Example
//!
//! ```rust,ignore
//! use tangerine_storefront::cms::CmsClient;
//!
//! let client = CmsClient::new(&config.cms);
//!
//! // List the catalog
//! let pages = client.list_products().await?;
//!
//! // Resolve a single product by name
//! let page = client.get_product("widget").await?;
//! ```

mod cache;
mod client;
pub mod types;

pub use client::CmsClient;
pub use types::{Page, PagesResponse, ProductFields};

use thiserror::Error;

/// Errors that can occur when talking to the content provider.
#[derive(Debug, Error)]
pub enum CmsError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("content API returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Raw response body, passed through for diagnostics.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
