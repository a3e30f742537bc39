//! Cart provider scope.
//!
//! Components that cannot take a [`CartStore`] directly can run inside a [`CartProvider`] scope
//! and look the store up with [`use_cart`]. Looking it up outside a scope is an error.

use std::future::Future;

use thiserror::Error;

use crate::cart::CartStore;

tokio::task_local! {
    static CURRENT_CART: CartStore;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartUsageError {
    #[error("use_cart must be used within a CartProvider")]
    MissingProvider,
}

/// Makes a cart store available to everything run inside its scope.
#[derive(Debug, Clone)]
pub struct CartProvider {
    store: CartStore,
}

impl CartProvider {
    #[must_use]
    pub fn new(store: CartStore) -> Self {
        Self { store }
    }

    /// Run `future` with this provider's store installed for [`use_cart`].
    pub async fn scope<F: Future>(&self, future: F) -> F::Output {
        CURRENT_CART.scope(self.store.clone(), future).await
    }

    #[must_use]
    pub fn store(&self) -> &CartStore {
        &self.store
    }
}

/// The cart store of the enclosing [`CartProvider`] scope.
///
/// # Errors
///
/// Returns [`CartUsageError::MissingProvider`] when called outside a provider scope.
pub fn use_cart() -> Result<CartStore, CartUsageError> {
    CURRENT_CART
        .try_with(CartStore::clone)
        .ok()
        .ok_or(CartUsageError::MissingProvider)
}

#[cfg(test)]
mod tests {
    use marketplace_cart::products::ProductId;
    use testresult::TestResult;

    use crate::test::{TestContext, shirt};

    use super::*;

    #[test]
    fn use_cart_outside_provider_fails() {
        let result = use_cart();

        assert!(
            matches!(result, Err(CartUsageError::MissingProvider)),
            "expected MissingProvider, got {result:?}"
        );
    }

    #[tokio::test]
    async fn use_cart_outside_provider_fails_in_async_context() {
        let result = async { use_cart() }.await;

        assert_eq!(
            result.err().map(|error| error.to_string()).as_deref(),
            Some("use_cart must be used within a CartProvider")
        );
    }

    #[tokio::test]
    async fn scope_exposes_the_provided_store() -> TestResult {
        let ctx = TestContext::new().await;
        let provider = CartProvider::new(ctx.cart.clone());

        provider
            .scope(async {
                let cart = use_cart()?;

                cart.add_to_cart(shirt()).await;
                cart.increment(&ProductId::from("p1")).await;

                Ok::<_, CartUsageError>(())
            })
            .await?;

        assert_eq!(
            ctx.cart
                .cart()
                .get(&ProductId::from("p1"))
                .map(|item| item.quantity.get()),
            Some(2)
        );
        assert_eq!(provider.store().products().len(), 1);

        Ok(())
    }
}
