use std::fmt::Write;

use marketplace_app::context::AppContext;
use marketplace_cart::cart::Cart;

pub(crate) fn run(ctx: &AppContext) -> String {
    render(&ctx.cart.cart())
}

/// One line per cart item followed by the cart totals.
pub(crate) fn render(cart: &Cart) -> String {
    if cart.is_empty() {
        return "cart is empty".to_string();
    }

    let mut output = String::new();

    for item in cart {
        _ = writeln!(
            output,
            "{}\t{}\t{} x {} = {}",
            item.id,
            item.title,
            item.price,
            item.quantity,
            item.line_total()
        );
    }

    _ = write!(
        output,
        "{} units, subtotal {}",
        cart.total_quantity(),
        cart.subtotal()
    );

    output
}
