use clap::Args;
use marketplace_app::context::AppContext;
use marketplace_cart::products::ProductId;

use super::{CommandError, list};

#[derive(Debug, Args)]
pub(crate) struct IncrementArgs {
    /// Product identifier
    id: String,
}

pub(crate) async fn run(ctx: &AppContext, args: IncrementArgs) -> Result<String, CommandError> {
    let id = ProductId::new(args.id);

    if !ctx.cart.increment(&id).await {
        return Err(CommandError::ItemNotFound(id));
    }

    Ok(list::run(ctx))
}
