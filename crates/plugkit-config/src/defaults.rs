//! Default values for every settings section.

use crate::schema::*;
use std::path::PathBuf;

/// Default plugins directory, relative to the working directory.
pub const DEFAULT_PLUGINS_DIR: &str = "plugins";

/// Default name of a plugin's public asset directory.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Locale accepted when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

impl Default for Config {
    fn default() -> Self {
        Self {
            plugins: PluginsConfig::default(),
            localization: LocalizationConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_PLUGINS_DIR),
            public_dir: DEFAULT_PUBLIC_DIR.to_string(),
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            supported_locales: vec![DEFAULT_LOCALE.to_string()],
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
        }
    }
}
