use clap::Args;
use marketplace_app::context::AppContext;
use marketplace_cart::{items::NewCartItem, products::ProductId};
use rust_decimal::Decimal;

use super::list;

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Product identifier
    #[arg(long)]
    id: String,

    /// Product display name
    #[arg(long)]
    title: String,

    /// Product image reference
    #[arg(long, default_value = "")]
    image_url: String,

    /// Unit price
    #[arg(long)]
    price: Decimal,
}

pub(crate) async fn run(ctx: &AppContext, args: AddArgs) -> String {
    ctx.cart
        .add_to_cart(NewCartItem {
            id: ProductId::new(args.id),
            title: args.title,
            image_url: args.image_url,
            price: args.price,
        })
        .await;

    list::run(ctx)
}
