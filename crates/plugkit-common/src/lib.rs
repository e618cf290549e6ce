//! # plugkit Common
//!
//! Shared types, utilities, and common functionality for plugkit.
//!
//! This crate provides the error type, logging setup, identifier newtypes and
//! the file naming/filtering rules used by every resource loader in the
//! workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{PluginError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
