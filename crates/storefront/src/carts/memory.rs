//! In-memory cart store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tangerine_core::ShopperId;

use super::{CartItems, CartStore, CartStoreError};

/// Process-memory cart store.
///
/// Holds every shopper's cart for the lifetime of the process. Each `add`
/// holds the write lock for the whole increment, so concurrent adds for the
/// same line cannot lose an update.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<ShopperId, CartItems>>,
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn add(&self, shopper: ShopperId, item: &str) -> Result<(), CartStoreError> {
        let mut carts = self.carts.write().await;
        let quantity = carts
            .entry(shopper)
            .or_default()
            .entry(item.to_string())
            .or_insert(0);
        *quantity = quantity.saturating_add(1);
        Ok(())
    }

    async fn items(&self, shopper: ShopperId) -> Result<CartItems, CartStoreError> {
        let carts = self.carts.read().await;
        Ok(carts.get(&shopper).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repeated_adds_accumulate() {
        let store = InMemoryCartStore::default();
        let shopper = ShopperId::random();

        for _ in 0..5 {
            store.add(shopper, "widget").await.unwrap();
        }

        let items = store.items(shopper).await.unwrap();
        assert_eq!(items.get("widget"), Some(&5));
    }

    #[tokio::test]
    async fn test_unknown_shopper_has_empty_cart() {
        let store = InMemoryCartStore::default();
        let items = store.items(ShopperId::random()).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_shoppers_are_isolated() {
        let store = InMemoryCartStore::default();
        let alice = ShopperId::random();
        let bob = ShopperId::random();

        store.add(alice, "widget").await.unwrap();
        store.add(bob, "gadget").await.unwrap();
        store.add(bob, "gadget").await.unwrap();

        let alice_items = store.items(alice).await.unwrap();
        assert_eq!(alice_items.get("widget"), Some(&1));
        assert!(!alice_items.contains_key("gadget"));

        let bob_items = store.items(bob).await.unwrap();
        assert_eq!(bob_items.get("gadget"), Some(&2));
    }

    #[tokio::test]
    async fn test_distinct_items_tracked_separately() {
        let store = InMemoryCartStore::default();
        let shopper = ShopperId::random();

        store.add(shopper, "widget").await.unwrap();
        store.add(shopper, "gadget").await.unwrap();
        store.add(shopper, "widget").await.unwrap();

        let items = store.items(shopper).await.unwrap();
        assert_eq!(items.get("widget"), Some(&2));
        assert_eq!(items.get("gadget"), Some(&1));
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryCartStore::default());
        let shopper = ShopperId::random();

        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.add(shopper, "widget").await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let items = store.items(shopper).await.unwrap();
        assert_eq!(items.get("widget"), Some(&32));
    }
}
