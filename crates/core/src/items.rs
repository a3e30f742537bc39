//! Cart Items

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::ProductId;

/// A product line held in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    pub title: String,

    /// Product image reference
    #[serde(alias = "imageUrl")]
    pub image_url: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,

    /// Units of this product in the cart
    pub quantity: NonZeroU32,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity.get())
    }
}

/// Product data for a line that has not been added to a cart yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    pub title: String,

    /// Product image reference
    #[serde(alias = "imageUrl")]
    pub image_url: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl From<NewCartItem> for CartItem {
    fn from(item: NewCartItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
            quantity: NonZeroU32::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_items_start_with_a_single_unit() {
        let item = CartItem::from(NewCartItem {
            id: ProductId::from("p1"),
            title: "Shirt".to_string(),
            image_url: "u".to_string(),
            price: Decimal::new(9_99, 2),
        });

        assert_eq!(item.quantity.get(), 1);
        assert_eq!(item.line_total(), Decimal::new(9_99, 2));
    }

    #[test]
    fn accepts_camel_case_image_url() -> TestResult {
        let item: CartItem = serde_json::from_str(
            r#"{"id":"p1","title":"Shirt","imageUrl":"u","price":9.99,"quantity":3}"#,
        )?;

        assert_eq!(item.image_url, "u");
        assert_eq!(item.quantity.get(), 3);
        assert_eq!(item.line_total(), Decimal::new(29_97, 2));

        Ok(())
    }

    #[test]
    fn rejects_zero_quantity() {
        let result = serde_json::from_str::<CartItem>(
            r#"{"id":"p1","title":"Shirt","image_url":"u","price":9.99,"quantity":0}"#,
        );

        assert!(result.is_err(), "zero quantity must not decode");
    }
}
