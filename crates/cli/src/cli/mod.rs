use clap::{Parser, Subcommand};
use marketplace_app::context::AppContext;
use marketplace_cart::products::ProductId;
use thiserror::Error;
use tracing::debug;

use crate::config::{LoggingConfig, StorageConfig};

mod add;
mod decrement;
mod increment;
mod list;

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("no item with product id {0} in the cart")]
    ItemNotFound(ProductId),
}

/// GoMarketplace cart CLI
#[derive(Debug, Parser)]
#[command(name = "marketplace", about = "GoMarketplace cart", long_about = None)]
pub(crate) struct Cli {
    /// Device storage settings.
    #[command(flatten)]
    pub(crate) storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the cart contents and totals
    List,

    /// Add a product to the cart
    Add(add::AddArgs),

    /// Add one unit of a product already in the cart
    Increment(increment::IncrementArgs),

    /// Remove one unit of a product, dropping it at zero
    Decrement(decrement::DecrementArgs),
}

impl Cli {
    /// Parse CLI arguments, reading a `.env` file first when present.
    pub(crate) fn load() -> Self {
        _ = dotenvy::dotenv();

        Self::parse()
    }

    /// Run the selected command, returning the text to print.
    pub(crate) async fn run(self) -> Result<String, CommandError> {
        debug!(path = %self.storage.store_path.display(), "opening cart storage");

        let ctx = AppContext::from_store_path(self.storage.store_path).await;

        match self.command {
            Commands::List => Ok(list::run(&ctx)),
            Commands::Add(args) => Ok(add::run(&ctx, args).await),
            Commands::Increment(args) => increment::run(&ctx, args).await,
            Commands::Decrement(args) => decrement::run(&ctx, args).await,
        }
    }
}
