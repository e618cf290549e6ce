//! Loader for plugin localization bundles.

use crate::paths::PublicPathResolver;
use crate::traits::{LoadContext, ResourceLoader};
use async_trait::async_trait;
use plugkit_common::{
    file_extension_filter, resource_name, FileFilter, PluginError, PluginUid, Result, SiteId,
};
use plugkit_i18n::{Bundle, LocaleRegistry, Localization, RegistrationOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Directory under a plugin's public path holding its localization files.
pub const LOCALIZATION_DIR: &str = "localization";

/// Identifies whose localizations a loader handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderContext {
    /// Plugin contributing the bundles.
    pub plugin_uid: PluginUid,
    /// Site to register under; `None` registers for all sites.
    pub site: Option<SiteId>,
}

impl LoaderContext {
    /// Creates a loader context.
    pub fn new(plugin_uid: impl Into<String>, site: Option<String>) -> Self {
        Self {
            plugin_uid: PluginUid::new(plugin_uid),
            site: site.map(SiteId::new),
        }
    }
}

/// Loads `<plugin public path>/localization/*.json` and registers one bundle
/// per file, named by the file's base name (`fr.json` registers locale `fr`).
pub struct PluginLocalizationLoader {
    plugin_uid: PluginUid,
    site: SiteId,
    paths: Arc<dyn PublicPathResolver>,
    registry: Arc<dyn LocaleRegistry>,
}

impl PluginLocalizationLoader {
    /// Creates a loader registering into the process-wide registry.
    pub fn new(context: LoaderContext, paths: Arc<dyn PublicPathResolver>) -> Self {
        Self::with_registry(context, paths, Arc::new(Localization::global()))
    }

    /// Creates a loader registering into `registry`.
    pub fn with_registry(
        context: LoaderContext,
        paths: Arc<dyn PublicPathResolver>,
        registry: Arc<dyn LocaleRegistry>,
    ) -> Self {
        Self {
            plugin_uid: context.plugin_uid,
            site: context.site.unwrap_or_default(),
            paths,
            registry,
        }
    }

    /// Site bundles are registered under.
    pub fn site(&self) -> &SiteId {
        &self.site
    }

    /// Scope passed to the registry with every bundle.
    pub fn registration_options(&self) -> RegistrationOptions {
        RegistrationOptions {
            site: self.site.clone(),
            plugin: self.plugin_uid.clone(),
        }
    }

    /// Registers `localization` under the locale named by `context.path`.
    ///
    /// A rejected bundle is logged and otherwise ignored so one unsupported
    /// locale does not stop the rest of the plugin from loading. Completion is
    /// deferred by one scheduler turn and is always `Ok`.
    pub async fn register(&self, localization: &Bundle, context: &LoadContext) -> Result<()> {
        let locale = self.get_resource_name(&context.path, localization);
        debug!(
            "[{}] Registering localizations for locale [{}]",
            self.plugin_uid, locale
        );

        let options = self.registration_options();
        if !self.registry.register_locale(&locale, localization, &options) {
            debug!(
                "[{}] Failed to register localizations for locale [{}]. Is the locale supported in your configuration?",
                self.plugin_uid, locale
            );
        }

        tokio::task::yield_now().await;
        Ok(())
    }

    /// Directory holding the localization files of `plugin_uid`.
    pub fn path_to_localizations(
        paths: &dyn PublicPathResolver,
        plugin_uid: &PluginUid,
    ) -> PathBuf {
        paths.public_path(plugin_uid).join(LOCALIZATION_DIR)
    }
}

#[async_trait]
impl ResourceLoader for PluginLocalizationLoader {
    type Resource = Bundle;

    fn plugin_uid(&self) -> &PluginUid {
        &self.plugin_uid
    }

    fn parse_resource(&self, path: &Path, content: &str) -> Result<Bundle> {
        serde_json::from_str(content).map_err(|e| {
            PluginError::resource_with_source(path, "Localization file is not a JSON object", e)
        })
    }

    /// Returns the bundle unchanged; it is only handed back on success.
    async fn init_resource(&self, resource: Bundle, context: &LoadContext) -> Result<Bundle> {
        if !context.register {
            return Ok(resource);
        }

        self.register(&resource, context).await?;
        Ok(resource)
    }

    fn get_file_filter(&self) -> FileFilter {
        file_extension_filter("json")
    }

    fn get_base_resource_path(&self) -> PathBuf {
        Self::path_to_localizations(self.paths.as_ref(), &self.plugin_uid)
    }

    fn get_resource_name(&self, path: &Path, _resource: &Bundle) -> String {
        resource_name(path)
    }
}
