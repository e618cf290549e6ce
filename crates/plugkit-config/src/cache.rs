//! Thread-safe configuration caching with arc-swap for lock-free reads.

use crate::loader::ConfigLoader;
use crate::schema::Config;
use arc_swap::ArcSwap;
use plugkit_common::Result;
use std::sync::Arc;
use tracing::info;

/// Thread-safe configuration cache using arc-swap for lock-free reads.
///
/// Resolvers hold the cache rather than a `Config` so a reload is picked up
/// by every loader created afterwards.
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Replaces the configuration. Invalid settings are rejected and the
    /// previous value stays in place.
    pub fn update(&self, config: Config) -> Result<()> {
        config.validate()?;
        self.config.store(Arc::new(config));
        Ok(())
    }

    /// Re-reads settings through `loader` and swaps them in.
    pub fn reload(&self, loader: &ConfigLoader) -> Result<()> {
        let config = loader.load()?;
        self.config.store(Arc::new(config));
        info!("Configuration reloaded");
        Ok(())
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
