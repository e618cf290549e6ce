//! Tests for the directory-walking driver using a minimal resource kind.

use async_trait::async_trait;
use plugkit_common::test_utils::property_testing::{dir_component_strategy, locale_stem_strategy};
use plugkit_common::{file_extension_filter, FileFilter, PluginError, PluginUid, Result};
use plugkit_loader::{load_resources, LoadContext, LoadOptions, ResourceLoader};
use proptest::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Loads `*.txt` files as plain strings and counts registrations.
struct TextLoader {
    plugin: PluginUid,
    base: PathBuf,
    registered: AtomicUsize,
    reject: Option<&'static str>,
}

impl TextLoader {
    fn new(base: &Path) -> Self {
        Self {
            plugin: PluginUid::new("text"),
            base: base.to_path_buf(),
            registered: AtomicUsize::new(0),
            reject: None,
        }
    }
}

#[async_trait]
impl ResourceLoader for TextLoader {
    type Resource = String;

    fn plugin_uid(&self) -> &PluginUid {
        &self.plugin
    }

    fn parse_resource(&self, path: &Path, content: &str) -> Result<String> {
        if Some(content) == self.reject {
            return Err(PluginError::resource(path, "rejected content"));
        }
        Ok(content.trim().to_string())
    }

    async fn init_resource(&self, resource: String, context: &LoadContext) -> Result<String> {
        if context.register {
            self.registered.fetch_add(1, Ordering::SeqCst);
        }
        Ok(resource)
    }

    fn get_file_filter(&self) -> FileFilter {
        file_extension_filter("txt")
    }

    fn get_base_resource_path(&self) -> PathBuf {
        self.base.clone()
    }
}

#[tokio::test]
async fn test_missing_directory_yields_empty_report() {
    let root = TempDir::new().unwrap();
    let loader = TextLoader::new(&root.path().join("does-not-exist"));

    let report = load_resources(&loader, LoadOptions { register: true }).await.unwrap();

    assert!(report.loaded.is_empty());
    assert!(report.is_complete());
}

#[tokio::test]
async fn test_base_path_that_is_a_file_is_an_error() {
    let root = TempDir::new().unwrap();
    let file = root.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    let loader = TextLoader::new(&file);

    let err = load_resources(&loader, LoadOptions::default()).await.unwrap_err();
    assert!(matches!(err, PluginError::Resource { .. }));
}

#[tokio::test]
async fn test_walk_is_filtered_sorted_and_not_recursive() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("b.txt"), "bee").unwrap();
    fs::write(root.path().join("a.txt"), "ay\n").unwrap();
    fs::write(root.path().join("c.json"), "{}").unwrap();
    fs::create_dir(root.path().join("nested.txt")).unwrap();
    fs::write(root.path().join("nested.txt/d.txt"), "dee").unwrap();
    let loader = TextLoader::new(root.path());

    let report = loader.load(LoadOptions { register: true }).await.unwrap();

    assert_eq!(report.names(), vec!["a", "b"]);
    assert_eq!(report.loaded[0].resource, "ay");
    assert_eq!(report.loaded[1].path, root.path().join("b.txt"));
    assert_eq!(loader.registered.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_dry_run_skips_registration() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("a.txt"), "ay").unwrap();
    let loader = TextLoader::new(root.path());

    let report = loader.load(LoadOptions { register: false }).await.unwrap();

    assert_eq!(report.names(), vec!["a"]);
    assert_eq!(loader.registered.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_failed_file_does_not_stop_the_walk() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("a.txt"), "bad").unwrap();
    fs::write(root.path().join("b.txt"), "good").unwrap();
    let mut loader = TextLoader::new(root.path());
    loader.reject = Some("bad");

    let report = loader.load(LoadOptions { register: true }).await.unwrap();

    assert_eq!(report.names(), vec!["b"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, root.path().join("a.txt"));
    assert!(!report.is_complete());
}

#[tokio::test]
async fn test_malformed_localization_json_is_reported() {
    use plugkit_common::test_utils::{bundle_fixtures, plugin_fixtures};
    use plugkit_config::Config;
    use plugkit_i18n::Localization;
    use plugkit_loader::{LoaderContext, PluginLocalizationLoader, PluginPaths};
    use std::sync::Arc;

    let root = TempDir::new().unwrap();
    plugin_fixtures::write_localization_file(root.path(), "blog", "de.json", bundle_fixtures::malformed_json());
    plugin_fixtures::write_localization_file(root.path(), "blog", "fr.json", bundle_fixtures::french_json());
    let mut config = Config::default();
    config.plugins.directory = root.path().to_path_buf();
    let registry = Arc::new(Localization::new(["fr"]).unwrap());
    let loader = PluginLocalizationLoader::with_registry(
        LoaderContext::new("blog", None),
        Arc::new(PluginPaths::from_config(config)),
        registry.clone(),
    );

    let report = loader.load(LoadOptions { register: true }).await.unwrap();

    assert_eq!(report.names(), vec!["fr"]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("de.json"));
    assert_eq!(registry.registered_count(), 1);
}

proptest! {
    #[test]
    fn test_default_resource_name_is_file_stem(
        dir in dir_component_strategy(),
        stem in locale_stem_strategy(),
    ) {
        let loader = TextLoader::new(Path::new("/unused"));
        let path = PathBuf::from("/unused").join(dir).join(format!("{stem}.txt"));

        prop_assert_eq!(loader.get_resource_name(&path, &String::from("ignored")), stem);
    }
}
