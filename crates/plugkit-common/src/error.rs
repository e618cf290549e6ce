//! Error types and utilities for plugkit

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for plugkit operations
pub type Result<T> = std::result::Result<T, PluginError>;

/// Main error type for plugkit operations
#[derive(Error, Debug)]
pub enum PluginError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A single resource file could not be read, parsed or initialized
    #[error("Resource error at {}: {message}", .path.display())]
    Resource {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
    },

    /// Validation errors for settings or input
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl PluginError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new resource error for the given file
    pub fn resource(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        Self::Resource {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new resource error for the given file with source
    pub fn resource_with_source(
        path: impl AsRef<Path>,
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Resource {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error with locale
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = PluginError::config("config issue");
        assert_eq!(config_error.to_string(), "Configuration error: config issue");

        let validation_error = PluginError::validation_field("must not be empty", "plugins.directory");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("must not be empty"));

        let localization_error = PluginError::localization_with_locale("Unsupported", "xx-YY");
        assert!(localization_error.to_string().contains("Localization error"));
        match localization_error {
            PluginError::Localization { locale, .. } => assert_eq!(locale.as_deref(), Some("xx-YY")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_resource_error_names_path() {
        let error = PluginError::resource("plugins/blog/public/localization/fr.json", "bad json");
        let display = error.to_string();
        assert!(display.contains("fr.json"));
        assert!(display.contains("bad json"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let wrapped = PluginError::resource_with_source("a.json", "Failed to read", io_error);
        assert!(wrapped.source().is_some());

        let config_error = PluginError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(config_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: PluginError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
        let error: PluginError = serde_error.into();

        assert!(error.to_string().contains("Serialization error"));
    }
}
