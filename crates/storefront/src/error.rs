//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::carts::CartStoreError;
use crate::cms::CmsError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Content provider operation failed.
    #[error("Content provider error: {0}")]
    Cms(#[from] CmsError),

    /// Cart store operation failed.
    #[error("Cart store error: {0}")]
    CartStore(#[from] CartStoreError),

    /// Session operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every variant is a server-side failure; capture to Sentry
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Provider failures carry the raw error detail through to the
        // client; everything else stays opaque.
        let message = match &self {
            Self::Cms(err) => err.to_string(),
            Self::CartStore(_) | Self::Session(_) => "Internal server error".to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
