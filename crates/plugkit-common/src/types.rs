//! Identifier newtypes for plugins and sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel site identifier meaning "all sites".
pub const GLOBAL_SITE: &str = "global";

/// Uniquely names an installed plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginUid(pub String);

impl PluginUid {
    /// Creates a plugin identifier.
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Borrows the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PluginUid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Scopes where a resource applies in a multi-tenant deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub String);

impl SiteId {
    /// Creates a site identifier.
    pub fn new(site: impl Into<String>) -> Self {
        Self(site.into())
    }

    /// The identifier that applies to every site.
    pub fn global() -> Self {
        Self(GLOBAL_SITE.to_string())
    }

    /// Whether this is the all-sites sentinel.
    pub fn is_global(&self) -> bool {
        self.0 == GLOBAL_SITE
    }

    /// Borrows the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SiteId {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
