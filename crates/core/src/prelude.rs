//! Marketplace cart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, Decremented},
    codec::CodecError,
    items::{CartItem, NewCartItem},
    products::ProductId,
};
