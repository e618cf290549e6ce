//! # plugkit Loader
//!
//! Loads the resources a plugin ships on disk and installs them into the host.
//!
//! Each resource kind implements [`ResourceLoader`]; the shared driver walks
//! the kind's base directory, parses every accepted file and hands it to the
//! loader's `init_resource`. [`PluginLocalizationLoader`] is the loader for
//! localization bundles (`<plugin public dir>/localization/*.json`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod driver;
pub mod localization;
pub mod paths;
pub mod traits;

pub use driver::{load_resources, LoadFailure, LoadReport, LoadedResource};
pub use localization::{LoaderContext, PluginLocalizationLoader, LOCALIZATION_DIR};
pub use paths::{PluginPaths, PublicPathResolver};
pub use traits::{LoadContext, LoadOptions, ResourceLoader};
