//! Marketplace Cart
//!
//! Cart domain for the GoMarketplace storefront: product lines with quantities, the
//! state transitions applied to them, and the JSON form they are persisted in.

pub mod cart;
pub mod codec;
pub mod items;
pub mod prelude;
pub mod products;
