//! Configuration schema definitions using serde.

use plugkit_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for plugkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where installed plugins live on disk.
    pub plugins: PluginsConfig,
    /// Localization registry configuration.
    pub localization: LocalizationConfig,
    /// Logging configuration.
    pub logging: LogConfig,
}

/// Plugin directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Directory containing one sub-directory per installed plugin.
    pub directory: PathBuf,
    /// Name of the directory inside each plugin holding its public assets.
    pub public_dir: String,
}

/// Localization configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Locales the registry accepts bundles for, e.g. `en-US`.
    pub supported_locales: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `plugkit_loader=debug`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json_format: bool,
    /// Append logs to this file instead of stdout.
    pub file_path: Option<String>,
}

impl Config {
    /// Public directory of the given plugin: `<plugins dir>/<plugin>/<public dir>`.
    pub fn plugin_public_path(&self, plugin_uid: &str) -> PathBuf {
        self.plugins
            .directory
            .join(plugin_uid)
            .join(&self.plugins.public_dir)
    }

    /// Root directory holding all plugins.
    pub fn plugins_dir(&self) -> &Path {
        &self.plugins.directory
    }
}

impl LogConfig {
    /// Converts to the subscriber settings understood by `plugkit_common::logging`.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json_format,
            file_path: self.file_path.clone(),
            ..LoggingConfig::default()
        }
    }
}
