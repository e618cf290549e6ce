//! Configuration loading from YAML files with environment overrides.

use crate::schema::Config;
use plugkit_common::{PluginError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "PLUGKIT_CONFIG_PATH";
/// Overrides `plugins.directory`.
pub const PLUGINS_DIR_ENV: &str = "PLUGKIT_PLUGINS_DIR";
/// Overrides `plugins.public_dir`.
pub const PUBLIC_DIR_ENV: &str = "PLUGKIT_PUBLIC_DIR";
/// Overrides `localization.supported_locales` (comma separated).
pub const SUPPORTED_LOCALES_ENV: &str = "PLUGKIT_SUPPORTED_LOCALES";
/// Overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "PLUGKIT_LOG_LEVEL";

/// File names tried in the working directory when no path is given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["plugkit.yaml", "plugkit.yml"];

/// Configuration loader for the application.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader reading the given settings file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Creates a loader that discovers the settings file from the environment
    /// or the working directory, falling back to defaults when none exists.
    pub fn discover() -> Self {
        let path = env::var(CONFIG_PATH_ENV).map(PathBuf::from).ok().or_else(|| {
            DEFAULT_CONFIG_FILES
                .into_iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
        });
        Self { path }
    }

    /// The settings file this loader reads, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads, overrides from the process environment and validates the settings.
    pub fn load(&self) -> Result<Config> {
        self.load_with_env(|key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with an injectable environment lookup.
    pub fn load_with_env<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.path {
            Some(path) => Self::load_file(path)?,
            None => {
                debug!("No settings file found, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides(&mut config, lookup);
        config.validate()?;

        info!(
            plugins_dir = %config.plugins.directory.display(),
            locales = ?config.localization.supported_locales,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parses a YAML settings file without applying overrides or validation.
    pub fn load_file(path: &Path) -> Result<Config> {
        debug!("Reading settings file: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| {
            PluginError::config_with_source(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            PluginError::config_with_source(
                format!("Failed to parse YAML configuration {}", path.display()),
                e,
            )
        })
    }

    /// Applies environment overrides to configuration.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(PLUGINS_DIR_ENV) {
            config.plugins.directory = PathBuf::from(dir);
        }

        if let Some(public_dir) = lookup(PUBLIC_DIR_ENV) {
            config.plugins.public_dir = public_dir;
        }

        if let Some(locales) = lookup(SUPPORTED_LOCALES_ENV) {
            config.localization.supported_locales = locales
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.logging.level = level;
        }
    }
}
