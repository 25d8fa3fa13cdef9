//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Format for display (e.g., "$19.99").
    ///
    /// The amount is rendered at whatever scale the provider supplied it,
    /// so a whole-number price stays a whole number.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "\u{20ac}",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}
