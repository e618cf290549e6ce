//! Resource loader trait definitions for polymorphic resource kinds.

use crate::driver::{self, LoadReport};
use async_trait::async_trait;
use plugkit_common::{resource_name, FileFilter, PluginUid, Result};
use std::path::{Path, PathBuf};

/// Per-file context handed to [`ResourceLoader::init_resource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadContext {
    /// File the resource was parsed from.
    pub path: PathBuf,
    /// Whether the resource should be installed into the host.
    pub register: bool,
}

/// Options for a whole load run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Install resources into the host; `false` only parses them.
    pub register: bool,
}

/// One kind of plugin resource (localizations, services, templates, ...).
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// The parsed form of one resource file.
    type Resource: Send + 'static;

    /// Plugin whose resources this loader handles.
    fn plugin_uid(&self) -> &PluginUid;

    /// Parses the raw contents of one resource file.
    fn parse_resource(&self, path: &Path, content: &str) -> Result<Self::Resource>;

    /// Initializes a parsed resource. The resource is handed back to the
    /// driver only when initialization succeeds.
    async fn init_resource(
        &self,
        resource: Self::Resource,
        context: &LoadContext,
    ) -> Result<Self::Resource>;

    /// Predicate selecting candidate files in the base directory.
    fn get_file_filter(&self) -> FileFilter;

    /// Absolute directory holding this kind's resources.
    fn get_base_resource_path(&self) -> PathBuf;

    /// Unique name of a resource, derived from its file by default.
    fn get_resource_name(&self, path: &Path, _resource: &Self::Resource) -> String {
        resource_name(path)
    }

    /// Loads every resource in the base directory.
    async fn load(&self, options: LoadOptions) -> Result<LoadReport<Self::Resource>> {
        driver::load_resources(self, options).await
    }
}
