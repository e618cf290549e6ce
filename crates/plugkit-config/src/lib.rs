//! # plugkit Config
//!
//! Type-safe configuration management for plugkit.
//!
//! Settings are read from a YAML file, overridden from the environment,
//! validated, and shared through a lock-free cache.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
