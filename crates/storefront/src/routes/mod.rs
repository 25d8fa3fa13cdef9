//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health     - Health check
//!
//! # Catalog
//! GET  /products   - Product listing (JSON, proxied from the content provider)
//!
//! # Cart
//! POST /cart       - Add one unit of an item to the shopper's cart
//!
//! # Checkout
//! POST /checkout   - Resolve cart prices and render the confirmation view
//! ```
//!
//! The catalog page itself is static and served from `static/` by the
//! binary's fallback service.

pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(products::index))
        .route("/cart", post(cart::add))
        .route("/checkout", post(checkout::confirm))
}

/// Assemble the storefront application: routes, session layer, state.
///
/// The binary wraps this with static file serving, request tracing, and
/// Sentry layers; tests drive it directly.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes().layer(session_layer).with_state(state)
}
