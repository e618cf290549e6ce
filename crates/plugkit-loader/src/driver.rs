//! Directory-walking driver shared by every resource loader.

use crate::traits::{LoadContext, LoadOptions, ResourceLoader};
use plugkit_common::{PluginError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// A resource that was read, parsed and initialized.
#[derive(Debug)]
pub struct LoadedResource<R> {
    /// Name derived by the loader, e.g. the locale of a localization file.
    pub name: String,
    /// File the resource came from.
    pub path: PathBuf,
    /// The initialized resource.
    pub resource: R,
}

/// A file that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    /// Offending file.
    pub path: PathBuf,
    /// Why it failed.
    pub error: PluginError,
}

/// Outcome of one load run. Files are listed in file name order.
#[derive(Debug)]
pub struct LoadReport<R> {
    /// Resources loaded successfully.
    pub loaded: Vec<LoadedResource<R>>,
    /// Files that failed; they do not stop the run.
    pub failures: Vec<LoadFailure>,
}

impl<R> Default for LoadReport<R> {
    fn default() -> Self {
        Self {
            loaded: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<R> LoadReport<R> {
    /// Names of the loaded resources in load order.
    pub fn names(&self) -> Vec<&str> {
        self.loaded.iter().map(|item| item.name.as_str()).collect()
    }

    /// Whether every candidate file loaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads every resource `loader` selects from its base directory.
///
/// A missing base directory yields an empty report. Per-file read, parse and
/// init errors are recorded in [`LoadReport::failures`] and the walk continues.
pub async fn load_resources<L>(loader: &L, options: LoadOptions) -> Result<LoadReport<L::Resource>>
where
    L: ResourceLoader + ?Sized,
{
    let base = loader.get_base_resource_path();
    let mut report = LoadReport::default();

    let Some(candidates) = candidate_files(loader, &base).await? else {
        debug!(
            "[{}] No resource directory at {:?}, nothing to load",
            loader.plugin_uid(),
            base
        );
        return Ok(report);
    };

    for path in candidates {
        match load_one(loader, &path, options.register).await {
            Ok((name, resource)) => report.loaded.push(LoadedResource {
                name,
                path,
                resource,
            }),
            Err(error) => {
                warn!("[{}] Failed to load {:?}: {}", loader.plugin_uid(), path, error);
                report.failures.push(LoadFailure { path, error });
            }
        }
    }

    info!(
        "[{}] Loaded {} resources from {:?} ({} failed)",
        loader.plugin_uid(),
        report.loaded.len(),
        base,
        report.failures.len()
    );
    Ok(report)
}

/// Lists accepted regular files directly under `base`, sorted by path.
/// Returns `None` when `base` does not exist.
async fn candidate_files<L>(loader: &L, base: &Path) -> Result<Option<Vec<PathBuf>>>
where
    L: ResourceLoader + ?Sized,
{
    match fs::metadata(base).await {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(PluginError::resource(
                base,
                "resource path exists but is not a directory",
            ))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PluginError::resource_with_source(
                base,
                "Failed to inspect resource directory",
                e,
            ))
        }
    }

    let filter = loader.get_file_filter();
    let mut entries = fs::read_dir(base)
        .await
        .map_err(|e| read_dir_error(base, e))?;

    let mut candidates = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| read_dir_error(base, e))?
    {
        let path = entry.path();
        // Follow symlinks so linked resource files are picked up.
        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Skipping unreadable entry {:?}: {}", path, e);
                continue;
            }
        };
        if metadata.is_file() && filter(&path, &metadata) {
            candidates.push(path);
        }
    }

    candidates.sort();
    Ok(Some(candidates))
}

fn read_dir_error(base: &Path, error: std::io::Error) -> PluginError {
    PluginError::resource_with_source(base, "Failed to read resource directory", error)
}

async fn load_one<L>(loader: &L, path: &Path, register: bool) -> Result<(String, L::Resource)>
where
    L: ResourceLoader + ?Sized,
{
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| PluginError::resource_with_source(path, "Failed to read resource file", e))?;

    let resource = loader.parse_resource(path, &content)?;
    let name = loader.get_resource_name(path, &resource);
    let context = LoadContext {
        path: path.to_path_buf(),
        register,
    };

    let resource = loader.init_resource(resource, &context).await?;
    Ok((name, resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_dir_error_names_directory() {
        let base = Path::new("/plugins/blog/public/localization");
        let error = read_dir_error(base, std::io::Error::other("device went away"));

        match error {
            PluginError::Resource { path, source, .. } => {
                assert_eq!(path, base);
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
