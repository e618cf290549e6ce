//! Locale tag parsing and canonicalization.

use plugkit_common::{PluginError, Result};
use unic_langid::LanguageIdentifier;

/// Locale supported when the registry is not configured otherwise.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Parses a locale tag and returns its canonical form.
///
/// Resource files are commonly named in lower case (`en-us.json`), so the
/// registry compares locales by this canonical form (`en-US`).
pub fn canonical_locale(name: &str) -> Result<String> {
    name.trim()
        .parse::<LanguageIdentifier>()
        .map(|id| id.to_string())
        .map_err(|_| PluginError::localization_with_locale("Invalid locale identifier", name))
}
