//! Cart storage.
//!
//! Carts map a shopper to item quantities. The storage is behind the
//! [`CartStore`] trait so request handlers never assume a particular backing
//! store; the shipped implementation is in-memory and carts vanish on
//! restart.

mod memory;

pub use memory::InMemoryCartStore;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use tangerine_core::ShopperId;

/// Errors a cart backend can produce.
///
/// The in-memory store is infallible; the variant exists for substituted
/// persistent backends.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The backing store failed.
    #[error("cart store error: {0}")]
    Backend(String),
}

/// A shopper's cart: item name to quantity.
pub type CartItems = HashMap<String, u32>;

/// Storage for shopper carts.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Increment the quantity of `item` in the shopper's cart by one,
    /// creating the cart and the line as needed.
    async fn add(&self, shopper: ShopperId, item: &str) -> Result<(), CartStoreError>;

    /// The shopper's cart, or an empty map if they have none.
    /// Side-effect-free.
    async fn items(&self, shopper: ShopperId) -> Result<CartItems, CartStoreError>;
}
