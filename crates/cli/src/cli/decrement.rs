use clap::Args;
use marketplace_app::context::AppContext;
use marketplace_cart::products::ProductId;

use super::{CommandError, list};

#[derive(Debug, Args)]
pub(crate) struct DecrementArgs {
    /// Product identifier
    id: String,
}

pub(crate) async fn run(ctx: &AppContext, args: DecrementArgs) -> Result<String, CommandError> {
    let id = ProductId::new(args.id);

    if !ctx.cart.decrement(&id).await {
        return Err(CommandError::ItemNotFound(id));
    }

    Ok(list::run(ctx))
}
