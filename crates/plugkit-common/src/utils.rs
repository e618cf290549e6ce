//! File naming and filtering rules shared by every resource loader.

use std::fs::Metadata;
use std::path::Path;

/// Predicate used by the directory walker to select candidate resource files.
pub type FileFilter = Box<dyn Fn(&Path, &Metadata) -> bool + Send + Sync>;

/// Derives a resource name from its file: the base name without its extension.
///
/// Only the last extension is stripped, so `en-us.min.json` yields `en-us.min`.
pub fn resource_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Creates a filter accepting files whose extension is exactly `extension`.
///
/// The extension is given without the leading dot. Files without an
/// extension never match.
pub fn file_extension_filter(extension: impl Into<String>) -> FileFilter {
    let extension = extension.into();
    Box::new(move |path: &Path, _metadata: &Metadata| {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == extension.as_str())
    })
}
