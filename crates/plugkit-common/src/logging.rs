//! Structured logging infrastructure for plugkit

use crate::error::{PluginError, Result};
use std::fs::OpenOptions;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "`plugkit_loader=trace`")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Let `RUST_LOG` take precedence over `level`
    pub prefer_env: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_targets: true,
            prefer_env: true,
        }
    }
}

impl LoggingConfig {
    /// Build the environment filter. `RUST_LOG` wins over `level` only when
    /// `prefer_env` is set.
    fn env_filter(&self) -> EnvFilter {
        let from_env = if self.prefer_env {
            EnvFilter::try_from_default_env().ok()
        } else {
            None
        };
        from_env
            .or_else(|| EnvFilter::try_new(&self.level).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Fails when a global subscriber is already installed or the log file cannot
/// be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = match (config.json_format, &config.file_path) {
        (true, Some(path)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_targets)
                        .with_writer(file),
                )
                .try_init()
        }
        (true, None) => registry
            .with(fmt::layer().json().with_target(config.include_targets))
            .try_init(),
        (false, Some(path)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(config.include_targets)
                        .with_writer(file),
                )
                .try_init()
        }
        (false, None) => registry
            .with(fmt::layer().with_target(config.include_targets))
            .try_init(),
    };

    result.map_err(|e| PluginError::config_with_source("Failed to install log subscriber", e))
}
