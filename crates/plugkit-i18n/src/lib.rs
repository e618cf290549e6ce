//! # plugkit I18n
//!
//! Localization registry for plugin-contributed translations.
//!
//! Bundles are registered per locale and scoped by site and plugin. The
//! process-wide instance returned by [`Localization::global`] is what plugin
//! loaders write to and what the rest of the host reads translations from.
//!
//! # Example
//!
//! ```rust
//! use plugkit_i18n::{Localization, LocaleRegistry, RegistrationOptions};
//! use serde_json::json;
//!
//! let registry = Localization::new(["en-US", "fr-FR"]).unwrap();
//! let bundle = json!({"title": "Titre"}).as_object().cloned().unwrap();
//! let options = RegistrationOptions::new("main", "blog");
//!
//! assert!(registry.register_locale("fr-fr", &bundle, &options));
//! assert_eq!(registry.get("title", "fr-FR", &options).as_deref(), Some("Titre"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod locale;
pub mod registry;

pub use locale::{canonical_locale, DEFAULT_LOCALE};
pub use registry::{Bundle, LocaleRegistry, Localization, RegistrationOptions};

#[cfg(any(test, feature = "testing"))]
pub use registry::MockLocaleRegistry;
