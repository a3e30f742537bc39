//! Cart

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    items::{CartItem, NewCartItem},
    products::ProductId,
};

/// Errors raised by cart state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// No line in the cart carries the given product id.
    #[error("no cart item with product id {0}")]
    ItemNotFound(ProductId),
}

/// Effect of decrementing a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decremented {
    /// The line is still present with the new quantity.
    Reduced(NonZeroU32),

    /// The line held a single unit and was removed.
    Removed,
}

/// Cart
///
/// Lines keep insertion order. Lookups by product id resolve to the first matching line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line with a quantity of one.
    ///
    /// Lines are never merged, so adding a product that is already present creates a second line.
    pub fn add(&mut self, item: NewCartItem) {
        self.items.push(CartItem::from(item));
    }

    /// Add one unit to the first line for `id`, returning its new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no line has the given product id.
    pub fn increment(&mut self, id: &ProductId) -> Result<NonZeroU32, CartError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or_else(|| CartError::ItemNotFound(id.clone()))?;

        item.quantity = item.quantity.saturating_add(1);

        Ok(item.quantity)
    }

    /// Remove one unit from the first line for `id`, dropping the line once it reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no line has the given product id.
    pub fn decrement(&mut self, id: &ProductId) -> Result<Decremented, CartError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == *id)
            .ok_or_else(|| CartError::ItemNotFound(id.clone()))?;

        let Some(item) = self.items.get_mut(position) else {
            return Err(CartError::ItemNotFound(id.clone()));
        };

        if let Some(quantity) = NonZeroU32::new(item.quantity.get() - 1) {
            item.quantity = quantity;

            return Ok(Decremented::Reduced(quantity));
        }

        self.items.remove(position);

        Ok(Decremented::Removed)
    }

    /// First line for the given product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across every line.
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of each line's unit price times its quantity.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
