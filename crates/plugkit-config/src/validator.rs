//! Runtime validation of loaded settings.

use crate::schema::Config;
use plugkit_common::{PluginError, Result};
use std::path::Component;
use std::path::Path;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if config.plugins.directory.as_os_str().is_empty() {
            return Err(PluginError::validation_field(
                "plugins directory must not be empty",
                "plugins.directory",
            ));
        }

        let public_dir = Path::new(&config.plugins.public_dir);
        let mut components = public_dir.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(PluginError::validation_field(
                    format!(
                        "public directory must be a single directory name, got '{}'",
                        config.plugins.public_dir
                    ),
                    "plugins.public_dir",
                ))
            }
        }

        if config.localization.supported_locales.is_empty() {
            return Err(PluginError::validation_field(
                "at least one supported locale is required",
                "localization.supported_locales",
            ));
        }
        if config
            .localization
            .supported_locales
            .iter()
            .any(|locale| locale.trim().is_empty())
        {
            return Err(PluginError::validation_field(
                "supported locales must not be blank",
                "localization.supported_locales",
            ));
        }

        if config.logging.level.trim().is_empty() {
            return Err(PluginError::validation_field(
                "log level must not be empty",
                "logging.level",
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Validates this configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_public_dir_must_be_single_component() {
        let mut config = Config::default();
        config.plugins.public_dir = "public/assets".to_string();
        assert!(config.validate().is_err());

        config.plugins.public_dir = "..".to_string();
        assert!(config.validate().is_err());

        config.plugins.public_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_plugins_dir_rejected() {
        let mut config = Config::default();
        config.plugins.directory = PathBuf::new();

        let err = config.validate().unwrap_err();
        match err {
            PluginError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("plugins.directory"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_supported_locales_required() {
        let mut config = Config::default();
        config.localization.supported_locales.clear();
        assert!(config.validate().is_err());

        config.localization.supported_locales = vec!["en-US".to_string(), "  ".to_string()];
        assert!(config.validate().is_err());
    }
}
