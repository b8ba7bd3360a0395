//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted notifier defaults
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored defaults.
    ///
    /// A missing file is not an error; it yields an all-`None` config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the given config, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing file.
    fn path(&self) -> PathBuf;

    /// Whether the backing file exists.
    fn exists(&self) -> bool;

    /// Write the built-in defaults. Fails if a file is already present.
    async fn init(&self) -> Result<(), ConfigError>;
}
