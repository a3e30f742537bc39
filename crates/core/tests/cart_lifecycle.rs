//! Cart lifecycle tests

use marketplace_cart::{codec, prelude::*};
use rust_decimal::Decimal;
use testresult::TestResult;

fn shirt() -> NewCartItem {
    NewCartItem {
        id: ProductId::from("p1"),
        title: "Shirt".to_string(),
        image_url: "https://cdn.example.com/shirt.png".to_string(),
        price: Decimal::new(9_99, 2),
    }
}

#[test]
fn add_increment_decrement_until_empty() -> TestResult {
    let id = ProductId::from("p1");
    let mut cart = Cart::new();

    cart.add(shirt());
    assert_eq!(cart.get(&id).map(|item| item.quantity.get()), Some(1));

    cart.increment(&id)?;
    assert_eq!(cart.get(&id).map(|item| item.quantity.get()), Some(2));

    cart.decrement(&id)?;
    assert_eq!(cart.get(&id).map(|item| item.quantity.get()), Some(1));

    assert_eq!(cart.decrement(&id)?, Decremented::Removed);
    assert!(cart.is_empty());

    Ok(())
}

#[test]
fn stored_form_survives_every_transition() -> TestResult {
    let id = ProductId::from("p1");
    let mut cart = Cart::new();

    cart.add(shirt());
    cart.add(NewCartItem {
        id: ProductId::from("p2"),
        title: "Socks".to_string(),
        image_url: "https://cdn.example.com/socks.png".to_string(),
        price: Decimal::new(3_50, 2),
    });
    assert_eq!(codec::decode(&codec::encode(&cart)?)?, cart);

    cart.increment(&id)?;
    assert_eq!(codec::decode(&codec::encode(&cart)?)?, cart);

    cart.decrement(&ProductId::from("p2"))?;
    assert_eq!(codec::decode(&codec::encode(&cart)?)?, cart);

    Ok(())
}

#[test]
fn high_precision_price_is_stored_exactly() -> TestResult {
    let price = Decimal::new(1_234_567_890_123_456_789, 19);
    let mut cart = Cart::new();

    cart.add(NewCartItem {
        price,
        ..shirt()
    });

    let encoded = codec::encode(&cart)?;
    let decoded = codec::decode(&encoded)?;

    assert!(
        encoded.contains("\"price\":0.1234567890123456789"),
        "price should keep every digit: {encoded}"
    );
    assert_eq!(decoded.items().first().map(|item| item.price), Some(price));
    assert_eq!(decoded, cart);

    Ok(())
}

#[test]
fn integer_price_from_the_mobile_app_decodes() -> TestResult {
    let cart = codec::decode(r#"[{"id":"p1","title":"Shirt","image_url":"u","price":10,"quantity":1}]"#)?;

    assert_eq!(
        cart.items().first().map(|item| item.price),
        Some(Decimal::from(10))
    );

    Ok(())
}
