//! Plugin path resolution.

use plugkit_common::PluginUid;
use plugkit_config::{Config, ConfigCache};
use std::path::PathBuf;
use std::sync::Arc;

/// Resolves the public asset directory of an installed plugin.
pub trait PublicPathResolver: Send + Sync {
    /// Absolute or working-directory-relative public path of `plugin_uid`.
    fn public_path(&self, plugin_uid: &PluginUid) -> PathBuf;
}

/// Resolves plugin paths from the current settings.
#[derive(Clone)]
pub struct PluginPaths {
    config: Arc<ConfigCache>,
}

impl PluginPaths {
    /// Creates a resolver reading through a shared settings cache.
    pub fn new(config: Arc<ConfigCache>) -> Self {
        Self { config }
    }

    /// Creates a resolver over fixed settings.
    pub fn from_config(config: Config) -> Self {
        Self::new(Arc::new(ConfigCache::new(config)))
    }

    /// Directory of the plugin itself, `<plugins dir>/<plugin>`.
    pub fn plugin_dir(&self, plugin_uid: &PluginUid) -> PathBuf {
        self.config.get().plugins_dir().join(plugin_uid.as_str())
    }
}

impl PublicPathResolver for PluginPaths {
    fn public_path(&self, plugin_uid: &PluginUid) -> PathBuf {
        self.config.get().plugin_public_path(plugin_uid.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_public_path_follows_settings() {
        let mut config = Config::default();
        config.plugins.directory = PathBuf::from("/srv/plugins");
        let cache = Arc::new(ConfigCache::new(config.clone()));
        let paths = PluginPaths::new(Arc::clone(&cache));
        let sample = PluginUid::new("sample");

        assert_eq!(paths.public_path(&sample), Path::new("/srv/plugins/sample/public"));
        assert_eq!(paths.plugin_dir(&sample), Path::new("/srv/plugins/sample"));

        config.plugins.public_dir = "static".to_string();
        cache.update(config).unwrap();
        assert_eq!(paths.public_path(&sample), Path::new("/srv/plugins/sample/static"));
    }
}
