//! Test utilities and shared test helpers for plugkit.
//!
//! This module provides fixtures for building plugin directory trees on disk,
//! sample localization bundles and logging setup that can be used across all
//! crates in the workspace for unit and integration testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Plugin directory tree fixtures.
pub mod plugin_fixtures {
    use super::*;

    /// Public directory name used by the default settings.
    pub const PUBLIC_DIR: &str = "public";

    /// Directory holding a plugin's localization files under its public path.
    pub fn localization_dir(plugins_root: &Path, plugin: &str) -> PathBuf {
        plugins_root.join(plugin).join(PUBLIC_DIR).join("localization")
    }

    /// Writes `contents` to `<plugins_root>/<plugin>/public/localization/<file_name>`,
    /// creating parent directories as needed.
    pub fn write_localization_file(
        plugins_root: &Path,
        plugin: &str,
        file_name: &str,
        contents: &str,
    ) -> PathBuf {
        let dir = localization_dir(plugins_root, plugin);
        fs::create_dir_all(&dir).expect("Failed to create localization directory");
        let path = dir.join(file_name);
        fs::write(&path, contents).expect("Failed to write localization file");
        path
    }
}

/// Localization bundle fixtures.
pub mod bundle_fixtures {
    /// A flat French bundle.
    pub fn french_json() -> &'static str {
        r#"{"title":"Titre"}"#
    }

    /// An English bundle with a nested section.
    pub fn english_json() -> &'static str {
        r#"{
  "title": "Title",
  "nav": {
    "home": "Home",
    "posts": "Posts"
  }
}"#
    }

    /// A file that is not valid JSON.
    pub fn malformed_json() -> &'static str {
        r#"{"title": "Titre""#
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating locale-like file stems such as `en-us` or `pt-BR`.
    pub fn locale_stem_strategy() -> impl Strategy<Value = String> {
        r"[a-z]{2,3}(-[A-Za-z]{2})?".prop_map(|s| s.to_string())
    }

    /// Strategy for generating directory components.
    pub fn dir_component_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z0-9_]{1,12}".prop_map(|s| s.to_string())
    }
}
