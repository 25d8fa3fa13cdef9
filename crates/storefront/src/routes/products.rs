//! Product listing route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::cms::PagesResponse;
use crate::error::Result;
use crate::state::AppState;

/// List the product catalog.
///
/// Proxies the content provider's page listing to the browser unchanged
/// under the `{ "data": [...] }` envelope. The client picks the price field
/// for its region; the server sends all of them.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<PagesResponse>> {
    let data = state.cms().list_products().await?;

    Ok(Json(PagesResponse { data }))
}
