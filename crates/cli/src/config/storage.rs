//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Device storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Path of the key-value storage file
    #[arg(
        long,
        env = "CART_STORE_PATH",
        default_value = ".gomarketplace/storage.json"
    )]
    pub store_path: PathBuf,
}
