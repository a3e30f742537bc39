//! Cart store.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use marketplace_cart::{
    cart::{Cart, CartError, Decremented},
    codec,
    items::{CartItem, NewCartItem},
    products::ProductId,
};
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::{cart::CART_STORAGE_KEY, storage::KeyValueStore};

/// What happened when the store loaded its persisted cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// A stored cart was found and restored.
    Restored { items: usize },

    /// Nothing was stored; the cart starts empty.
    Empty,

    /// The stored cart could not be read or decoded; the cart starts empty.
    Failed,
}

/// Authoritative in-memory cart, mirrored to a key-value store after every change.
///
/// Handles are cheap to clone and share the same cart. Every mutation is applied to the latest
/// state in a single step, and readers see it before the persistent write is issued. Persistence
/// failures are logged and never surface to callers.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<Cart>,
    storage: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
    hydration: Hydration,
}

impl CartStore {
    /// Open the store, restoring whatever cart was last persisted.
    ///
    /// Hydration happens exactly once, here.
    pub async fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let (cart, hydration) = hydrate(storage.as_ref()).await;
        let (state, _) = watch::channel(cart);

        Self {
            inner: Arc::new(Inner {
                state,
                storage,
                write_lock: Mutex::new(()),
                hydration,
            }),
        }
    }

    /// Outcome of the hydration performed by [`CartStore::open`].
    #[must_use]
    pub fn hydration(&self) -> Hydration {
        self.inner.hydration
    }

    /// Snapshot of the cart lines in insertion order.
    #[must_use]
    pub fn products(&self) -> Vec<CartItem> {
        self.inner.state.borrow().items().to_vec()
    }

    /// Snapshot of the whole cart.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.inner.state.borrow().clone()
    }

    /// Watch the cart; the receiver is notified after every applied mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.inner.state.subscribe()
    }

    /// Append `item` as a new line with a quantity of one, then persist the cart.
    pub async fn add_to_cart(&self, item: NewCartItem) {
        let id = item.id.clone();

        self.inner.state.send_modify(|cart| cart.add(item));

        debug!(product = %id, "added item to cart");

        self.persist().await;
    }

    /// Add one unit to the line for `id`, then persist the cart.
    ///
    /// Returns `false`, leaving the cart and storage untouched, if no line has that id.
    pub async fn increment(&self, id: &ProductId) -> bool {
        match self.apply(id, Cart::increment) {
            Ok(quantity) => {
                debug!(product = %id, quantity = quantity.get(), "incremented cart item");

                self.persist().await;

                true
            }
            Err(error) => {
                warn!(%error, "ignoring increment");

                false
            }
        }
    }

    /// Remove one unit from the line for `id`, dropping the line at zero, then persist the cart.
    ///
    /// Returns `false`, leaving the cart and storage untouched, if no line has that id.
    pub async fn decrement(&self, id: &ProductId) -> bool {
        match self.apply(id, Cart::decrement) {
            Ok(Decremented::Reduced(quantity)) => {
                debug!(product = %id, quantity = quantity.get(), "decremented cart item");

                self.persist().await;

                true
            }
            Ok(Decremented::Removed) => {
                debug!(product = %id, "removed cart item");

                self.persist().await;

                true
            }
            Err(error) => {
                warn!(%error, "ignoring decrement");

                false
            }
        }
    }

    /// Apply `op` to the current cart, notifying subscribers only when it succeeds.
    fn apply<T>(
        &self,
        id: &ProductId,
        op: impl FnOnce(&mut Cart, &ProductId) -> Result<T, CartError>,
    ) -> Result<T, CartError> {
        let mut outcome = Err(CartError::ItemNotFound(id.clone()));

        self.inner.state.send_if_modified(|cart| {
            outcome = op(cart, id);
            outcome.is_ok()
        });

        outcome
    }

    /// Write the latest cart to storage.
    ///
    /// Writes are serialized and each one encodes the state current at the time it runs, so the
    /// stored value always converges on the in-memory cart.
    async fn persist(&self) {
        let _guard = self.inner.write_lock.lock().await;

        let encoded = codec::encode(&self.inner.state.borrow());

        let value = match encoded {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "failed to encode cart for storage");

                return;
            }
        };

        match self.inner.storage.set(CART_STORAGE_KEY, value).await {
            Ok(()) => debug!(key = CART_STORAGE_KEY, "persisted cart"),
            Err(error) => warn!(%error, key = CART_STORAGE_KEY, "failed to persist cart"),
        }
    }
}

impl Debug for CartStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("cart", &*self.inner.state.borrow())
            .field("hydration", &self.inner.hydration)
            .finish_non_exhaustive()
    }
}

async fn hydrate(storage: &dyn KeyValueStore) -> (Cart, Hydration) {
    let stored = match storage.get(CART_STORAGE_KEY).await {
        Ok(Some(stored)) => stored,
        Ok(None) => {
            debug!(key = CART_STORAGE_KEY, "no stored cart");

            return (Cart::new(), Hydration::Empty);
        }
        Err(error) => {
            warn!(%error, key = CART_STORAGE_KEY, "failed to read stored cart");

            return (Cart::new(), Hydration::Failed);
        }
    };

    match codec::decode(&stored) {
        Ok(cart) => {
            let items = cart.len();

            info!(items, "restored cart from storage");

            (cart, Hydration::Restored { items })
        }
        Err(error) => {
            warn!(%error, key = CART_STORAGE_KEY, "discarding unreadable stored cart");

            (Cart::new(), Hydration::Failed)
        }
    }
}
