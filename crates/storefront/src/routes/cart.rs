//! Cart route handlers.
//!
//! The cart has exactly one mutation: adding a single unit of an item.
//! There is no decrement, removal, or read-back endpoint; the catalog page
//! keeps its own optimistic counter.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::current_shopper;
use crate::state::AppState;

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    /// Item name, as published by the content provider.
    #[serde(rename = "itemId")]
    pub item_id: String,
}

/// Add one unit of an item to the shopper's cart.
///
/// The item id is not validated here; an id the provider does not know
/// surfaces as a lookup failure at checkout.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<StatusCode> {
    let shopper = current_shopper(&session).await?;

    state.carts().add(shopper, &request.item_id).await?;

    Ok(StatusCode::OK)
}
