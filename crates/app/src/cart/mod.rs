//! Cart

pub mod provider;
pub mod store;

pub use provider::{CartProvider, CartUsageError, use_cart};
pub use store::*;

/// Storage key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "@GoMarketplace/cart";
