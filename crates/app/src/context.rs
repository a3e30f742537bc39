//! App Context

use std::{path::PathBuf, sync::Arc};

use crate::{
    cart::{CartProvider, CartStore},
    storage::{FileStore, KeyValueStore},
};

/// Services shared by the storefront, passed explicitly to whatever needs them.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub cart: CartStore,
}

impl AppContext {
    /// Build application context on top of the given key-value store, hydrating the cart.
    pub async fn from_storage(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            cart: CartStore::open(storage).await,
        }
    }

    /// Build application context backed by a storage file at `path`.
    pub async fn from_store_path(path: impl Into<PathBuf>) -> Self {
        Self::from_storage(Arc::new(FileStore::new(path))).await
    }

    /// Provider scope exposing this context's cart to [`crate::cart::use_cart`].
    #[must_use]
    pub fn cart_provider(&self) -> CartProvider {
        CartProvider::new(self.cart.clone())
    }
}
