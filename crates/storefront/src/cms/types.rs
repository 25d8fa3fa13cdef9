//! Domain types for the content provider's Pages API.
//!
//! These types mirror the provider's JSON shape closely enough that the
//! product listing can be proxied to the browser unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tangerine_core::Region;

// =============================================================================
// Page Types
// =============================================================================

/// Envelope around a page listing: `{ "data": [...] }`.
///
/// Reused as the response body of `GET /products`, so the browser sees the
/// same shape the provider sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagesResponse {
    /// The listed pages.
    pub data: Vec<Page>,
}

/// Envelope around a single-page lookup: `{ "data": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    /// The resolved page.
    pub data: Page,
}

/// A published product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page name; doubles as the item identifier in carts.
    pub name: String,
    /// The page's content fields.
    pub fields: ProductFields,
}

/// Content fields of a product page.
///
/// Prices are decimals keyed per region; the provider names the euro field
/// `price-euro` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Unit price in US dollars.
    pub price: Decimal,
    /// Unit price in euros.
    #[serde(rename = "price-euro")]
    pub price_euro: Decimal,
}

impl ProductFields {
    /// Unit price for the given region.
    #[must_use]
    pub const fn price_for(&self, region: Region) -> Decimal {
        match region {
            Region::US => self.price,
            Region::EU => self.price_euro,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn widget_json() -> serde_json::Value {
        serde_json::json!({
            "name": "widget",
            "page_type": "product",
            "fields": {
                "title": "Widget",
                "description": "A very good widget",
                "price": 10,
                "price-euro": 9
            }
        })
    }

    #[test]
    fn test_deserializes_provider_page() {
        let page: Page = serde_json::from_value(widget_json()).unwrap();
        assert_eq!(page.name, "widget");
        assert_eq!(page.fields.title, "Widget");
        assert_eq!(page.fields.price, Decimal::from(10));
        assert_eq!(page.fields.price_euro, Decimal::from(9));
    }

    #[test]
    fn test_euro_field_keeps_wire_name() {
        let page: Page = serde_json::from_value(widget_json()).unwrap();
        let out = serde_json::to_value(&page).unwrap();
        assert!(out["fields"].get("price-euro").is_some());
        assert!(out["fields"].get("price_euro").is_none());
    }

    #[test]
    fn test_price_for_region() {
        let page: Page = serde_json::from_value(widget_json()).unwrap();
        assert_eq!(page.fields.price_for(Region::US), Decimal::from(10));
        assert_eq!(page.fields.price_for(Region::EU), Decimal::from(9));
    }

    #[test]
    fn test_fractional_prices_survive() {
        let json = serde_json::json!({
            "name": "gadget",
            "fields": {
                "title": "Gadget",
                "description": "",
                "price": 12.99,
                "price-euro": 11.49
            }
        });
        let page: Page = serde_json::from_value(json).unwrap();
        assert_eq!(page.fields.price, "12.99".parse::<Decimal>().unwrap());
    }
}
