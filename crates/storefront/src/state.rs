//! Application state shared across handlers.

use std::sync::Arc;

use crate::carts::CartStore;
use crate::cms::CmsClient;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the content provider client and the cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cms: CmsClient,
    carts: Arc<dyn CartStore>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `carts` - Cart storage backend
    #[must_use]
    pub fn new(config: StorefrontConfig, carts: Arc<dyn CartStore>) -> Self {
        let cms = CmsClient::new(&config.cms);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                cms,
                carts,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the content provider client.
    #[must_use]
    pub fn cms(&self) -> &CmsClient {
        &self.inner.cms
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &dyn CartStore {
        self.inner.carts.as_ref()
    }
}
