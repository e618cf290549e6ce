//! Process-wide localization registry.

use crate::locale::{canonical_locale, DEFAULT_LOCALE};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use plugkit_common::{PluginUid, Result, SiteId};
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace, warn};

/// A parsed localization file: translation keys mapped to strings or nested mappings.
pub type Bundle = serde_json::Map<String, Value>;

/// Scope a bundle is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationOptions {
    /// Site the translations apply to; the global site applies everywhere.
    pub site: SiteId,
    /// Plugin contributing the translations.
    pub plugin: PluginUid,
}

impl RegistrationOptions {
    /// Creates registration options for a site and plugin.
    pub fn new(site: impl Into<String>, plugin: impl Into<String>) -> Self {
        Self {
            site: SiteId::new(site),
            plugin: PluginUid::new(plugin),
        }
    }
}

/// Accepts localization bundles for a locale.
///
/// Implementations own their storage and locking; callers perform one write
/// per bundle and assume nothing else.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait LocaleRegistry: Send + Sync {
    /// Registers `bundle` for `locale` under the scope in `options`.
    ///
    /// Returns `false` when the registry declines the bundle, e.g. because the
    /// locale is not supported.
    fn register_locale(&self, locale: &str, bundle: &Bundle, options: &RegistrationOptions) -> bool;
}

impl<T: LocaleRegistry + ?Sized> LocaleRegistry for &T {
    fn register_locale(&self, locale: &str, bundle: &Bundle, options: &RegistrationOptions) -> bool {
        (**self).register_locale(locale, bundle, options)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BundleKey {
    locale: String,
    site: SiteId,
    plugin: PluginUid,
}

impl BundleKey {
    fn new(locale: String, options: &RegistrationOptions) -> Self {
        Self {
            locale,
            site: options.site.clone(),
            plugin: options.plugin.clone(),
        }
    }
}

/// In-memory localization store keyed by (locale, site, plugin).
///
/// Each key holds exactly one bundle; registering the same key again
/// replaces the previous bundle whole.
#[derive(Debug, Default)]
pub struct Localization {
    supported: RwLock<BTreeSet<String>>,
    bundles: RwLock<HashMap<BundleKey, HashMap<String, String>>>,
}

static GLOBAL: Lazy<Localization> = Lazy::new(|| Localization {
    supported: RwLock::new(BTreeSet::from([DEFAULT_LOCALE.to_string()])),
    bundles: RwLock::new(HashMap::new()),
});

impl Localization {
    /// Creates a registry accepting the given locales.
    pub fn new<I, S>(supported: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = Self::default();
        registry.set_supported_locales(supported)?;
        Ok(registry)
    }

    /// The process-wide registry shared by every plugin loader.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Replaces the set of supported locales. Already registered bundles are kept.
    pub fn set_supported_locales<I, S>(&self, supported: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = supported
            .into_iter()
            .map(|locale| canonical_locale(locale.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;

        debug!("Supported locales: {:?}", canonical);
        *self.supported.write() = canonical;
        Ok(())
    }

    /// Supported locales in canonical form, sorted.
    pub fn supported_locales(&self) -> Vec<String> {
        self.supported.read().iter().cloned().collect()
    }

    /// Whether bundles for `locale` would be accepted.
    pub fn is_supported(&self, locale: &str) -> bool {
        canonical_locale(locale).is_ok_and(|canonical| self.supported.read().contains(&canonical))
    }

    /// Removes the bundle registered for `locale` under `options`.
    ///
    /// Returns whether a bundle was removed.
    pub fn unregister_locale(&self, locale: &str, options: &RegistrationOptions) -> bool {
        let Ok(canonical) = canonical_locale(locale) else {
            return false;
        };
        self.bundles
            .write()
            .remove(&BundleKey::new(canonical, options))
            .is_some()
    }

    /// Looks up a translation, falling back from the given site to the global site.
    ///
    /// Nested keys are addressed with dots, e.g. `nav.home`.
    pub fn get(&self, key: &str, locale: &str, options: &RegistrationOptions) -> Option<String> {
        let canonical = canonical_locale(locale).ok()?;
        let bundles = self.bundles.read();

        let scoped = BundleKey::new(canonical, options);
        if let Some(value) = bundles.get(&scoped).and_then(|b| b.get(key)) {
            return Some(value.clone());
        }
        if options.site.is_global() {
            return None;
        }

        let global = BundleKey {
            site: SiteId::global(),
            ..scoped
        };
        bundles.get(&global).and_then(|b| b.get(key)).cloned()
    }

    /// Canonical locales registered under `options`, sorted.
    pub fn registered_locales(&self, options: &RegistrationOptions) -> Vec<String> {
        let mut locales: Vec<String> = self
            .bundles
            .read()
            .keys()
            .filter(|key| key.site == options.site && key.plugin == options.plugin)
            .map(|key| key.locale.clone())
            .collect();
        locales.sort();
        locales
    }

    /// Number of registered bundles across all scopes.
    pub fn registered_count(&self) -> usize {
        self.bundles.read().len()
    }

    /// Drops every registered bundle. Supported locales are kept.
    pub fn clear(&self) {
        self.bundles.write().clear();
    }
}

impl LocaleRegistry for Localization {
    fn register_locale(&self, locale: &str, bundle: &Bundle, options: &RegistrationOptions) -> bool {
        let canonical = match canonical_locale(locale) {
            Ok(canonical) => canonical,
            Err(e) => {
                debug!("Rejecting bundle: {}", e);
                return false;
            }
        };
        if !self.supported.read().contains(&canonical) {
            debug!("Rejecting bundle for unsupported locale [{}]", canonical);
            return false;
        }

        let mut entries = HashMap::new();
        if let Err(key) = flatten_into("", bundle, &mut entries) {
            warn!(
                "Rejecting bundle for locale [{}] of plugin [{}]: value at [{}] is not a string or mapping, or the key is defined twice",
                canonical, options.plugin, key
            );
            return false;
        }

        trace!(
            "Registered {} keys for locale [{}] site [{}] plugin [{}]",
            entries.len(),
            canonical,
            options.site,
            options.plugin
        );
        self.bundles
            .write()
            .insert(BundleKey::new(canonical, options), entries);
        true
    }
}

/// Flattens nested mappings into dotted keys. Numbers and booleans are
/// stored as their JSON text. On null or array values, or when a flat dotted
/// key collides with a nested path, the offending key is returned.
fn flatten_into(
    prefix: &str,
    map: &Bundle,
    out: &mut HashMap<String, String>,
) -> std::result::Result<(), String> {
    for (key, value) in map {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Object(nested) => {
                flatten_into(&full_key, nested, out)?;
                continue;
            }
            Value::Null | Value::Array(_) => return Err(full_key),
        };

        match out.entry(full_key) {
            Entry::Occupied(occupied) => return Err(occupied.key().clone()),
            Entry::Vacant(vacant) => {
                vacant.insert(text);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle(value: Value) -> Bundle {
        value.as_object().cloned().expect("bundle must be an object")
    }

    #[test]
    fn test_flatten_nested_keys() {
        let mut out = HashMap::new();
        let source = bundle(json!({"a": "1", "b": {"c": "2", "d": {"e": "3"}}, "n": 4, "t": true}));

        flatten_into("", &source, &mut out).unwrap();

        assert_eq!(out.get("a").map(String::as_str), Some("1"));
        assert_eq!(out.get("b.c").map(String::as_str), Some("2"));
        assert_eq!(out.get("b.d.e").map(String::as_str), Some("3"));
        assert_eq!(out.get("n").map(String::as_str), Some("4"));
        assert_eq!(out.get("t").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_flatten_reports_offending_key() {
        let mut out = HashMap::new();
        let source = bundle(json!({"menu": {"items": ["a", "b"]}}));

        assert_eq!(flatten_into("", &source, &mut out), Err("menu.items".to_string()));
    }

    #[test]
    fn test_flatten_rejects_key_collision() {
        let mut out = HashMap::new();
        let source = bundle(json!({"nav": {"home": "Nested"}, "nav.home": "Flat"}));

        assert_eq!(flatten_into("", &source, &mut out), Err("nav.home".to_string()));
    }

    #[test]
    fn test_global_registry_defaults_to_english() {
        assert!(Localization::global().is_supported("en-US"));
    }
}
