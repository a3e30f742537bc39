//! Test context for store-level tests.

use std::sync::Arc;

use marketplace_cart::{cart::Cart, codec, items::NewCartItem, products::ProductId};
use rust_decimal::Decimal;
use testresult::TestResult;

use crate::{
    cart::{CART_STORAGE_KEY, CartStore},
    storage::{KeyValueStore, MemoryStore},
};

pub struct TestContext {
    pub storage: Arc<MemoryStore>,
    pub cart: CartStore,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::from_storage(MemoryStore::new()).await
    }

    /// Build a context whose storage already holds `stored` under the cart key.
    pub async fn with_stored(stored: &str) -> Self {
        Self::from_storage(MemoryStore::with_entries([(CART_STORAGE_KEY, stored)])).await
    }

    async fn from_storage(storage: MemoryStore) -> Self {
        let storage = Arc::new(storage);
        let cart = CartStore::open(storage.clone()).await;

        Self { storage, cart }
    }

    /// Decode whatever is currently persisted under the cart key.
    pub async fn stored_cart(&self) -> TestResult<Cart> {
        let stored = self
            .storage
            .get(CART_STORAGE_KEY)
            .await?
            .ok_or("no cart stored")?;

        Ok(codec::decode(&stored)?)
    }
}

pub fn shirt() -> NewCartItem {
    NewCartItem {
        id: ProductId::from("p1"),
        title: "Shirt".to_string(),
        image_url: "https://cdn.example.com/shirt.png".to_string(),
        price: Decimal::new(9_99, 2),
    }
}

pub fn socks() -> NewCartItem {
    NewCartItem {
        id: ProductId::from("p2"),
        title: "Socks".to_string(),
        image_url: "https://cdn.example.com/socks.png".to_string(),
        price: Decimal::new(3_50, 2),
    }
}
