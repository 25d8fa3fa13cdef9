//! Storefront regions.
//!
//! A region is a tag carried by the client (query parameter on the catalog
//! page, form field at checkout) that selects which of the provider's price
//! fields to read and which currency to display.

use serde::{Deserialize, Serialize};

use crate::types::price::CurrencyCode;

/// Region the shopper is browsing from.
///
/// Deserialization is strict: values outside the known set are rejected
/// rather than silently falling back to a price field that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Region {
    /// United States - prices read from the provider's `price` field.
    #[default]
    US,
    /// Euro zone - prices read from the provider's `price-euro` field.
    EU,
}

impl Region {
    /// Currency the region's prices are denominated in.
    #[must_use]
    pub const fn currency(self) -> CurrencyCode {
        match self {
            Self::US => CurrencyCode::USD,
            Self::EU => CurrencyCode::EUR,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::US => write!(f, "US"),
            Self::EU => write!(f, "EU"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_known_regions() {
        assert_eq!(serde_json::from_str::<Region>("\"US\"").unwrap(), Region::US);
        assert_eq!(serde_json::from_str::<Region>("\"EU\"").unwrap(), Region::EU);
    }

    #[test]
    fn rejects_unknown_region() {
        assert!(serde_json::from_str::<Region>("\"MARS\"").is_err());
    }

    #[test]
    fn defaults_to_us() {
        assert_eq!(Region::default(), Region::US);
    }

    #[test]
    fn region_selects_currency() {
        assert_eq!(Region::US.currency(), CurrencyCode::USD);
        assert_eq!(Region::EU.currency(), CurrencyCode::EUR);
    }
}
