//! Checkout route handler.
//!
//! Checkout resolves every cart line's current price from the content
//! provider and renders a confirmation view with the order total. The
//! per-item lookups run concurrently and join all-or-nothing: one failed
//! lookup fails the whole checkout, and no partial total is shown.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use futures_util::future::try_join_all;
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tangerine_core::{Price, Region};

use crate::cms::{CmsError, Page};
use crate::error::Result;
use crate::models::session::current_shopper;
use crate::state::AppState;

/// Checkout form data.
///
/// The region comes from the catalog page's hidden `form-region` field. An
/// absent region falls back to US (the client-side default); an unrecognized
/// one is rejected at deserialization.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub region: Region,
}

/// A single confirmed order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLine {
    pub title: String,
    pub quantity: u32,
}

/// Payment confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    /// Region-symbolized order total, e.g. "$20".
    pub total: String,
    pub items: Vec<CheckoutLine>,
}

/// Resolve the shopper's cart and render the order confirmation.
#[instrument(skip(state, session))]
pub async fn confirm(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<ConfirmationTemplate> {
    let shopper = current_shopper(&session).await?;
    let cart = state.carts().items(shopper).await?;

    // One provider lookup per distinct cart line, issued concurrently and
    // joined all-or-nothing.
    let cms = state.cms();
    let lookups = cart.into_iter().map(|(name, quantity)| async move {
        let page = cms.get_product(&name).await?;
        Ok::<_, CmsError>((page, quantity))
    });
    let resolved = try_join_all(lookups).await?;

    let (total, items) = totalize(form.region, resolved);

    Ok(ConfirmationTemplate {
        total: Price::new(total, form.region.currency()).display(),
        items,
    })
}

/// Sum the order and produce its display lines.
///
/// Accumulation order follows lookup resolution order; the sum is
/// commutative, so the total does not depend on it.
fn totalize(region: Region, resolved: Vec<(Page, u32)>) -> (Decimal, Vec<CheckoutLine>) {
    let mut total = Decimal::ZERO;
    let items = resolved
        .into_iter()
        .map(|(page, quantity)| {
            total += page.fields.price_for(region) * Decimal::from(quantity);
            CheckoutLine {
                title: page.fields.title,
                quantity,
            }
        })
        .collect();

    (total, items)
}
