//! CLI configuration module

pub(crate) mod logging;
pub(crate) mod storage;

pub(crate) use logging::{LogFormat, LoggingConfig};
pub(crate) use storage::StorageConfig;
