//! Persisted cart format
//!
//! A cart is stored as a JSON array of line objects with the fields `id`, `title`, `image_url`,
//! `price` and `quantity`. `price` is a JSON number carrying every digit of the decimal;
//! `imageUrl` is accepted on read.

use thiserror::Error;

use crate::cart::Cart;

/// Errors raised while encoding or decoding a persisted cart.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The cart could not be serialized.
    #[error("failed to encode cart")]
    Encode(#[source] serde_json::Error),

    /// The stored value is not a valid cart.
    #[error("failed to decode stored cart")]
    Decode(#[source] serde_json::Error),
}

/// Serialize a cart into its stored form.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode(cart: &Cart) -> Result<String, CodecError> {
    serde_json::to_string(cart).map_err(CodecError::Encode)
}

/// Parse a stored value back into a cart.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] if the value is not a JSON array of cart lines.
pub fn decode(value: &str) -> Result<Cart, CodecError> {
    serde_json::from_str(value).map_err(CodecError::Decode)
}
