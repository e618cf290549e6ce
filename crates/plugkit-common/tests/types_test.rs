//! Tests for the plugin and site identifier newtypes.

use plugkit_common::{PluginUid, SiteId, GLOBAL_SITE};

#[test]
fn test_site_default_is_global() {
    let site = SiteId::default();
    assert!(site.is_global());
    assert_eq!(site.as_str(), GLOBAL_SITE);
    assert!(!SiteId::from("main").is_global());
}

#[test]
fn test_identifiers_display_raw_value() {
    assert_eq!(PluginUid::new("blog").to_string(), "blog");
    assert_eq!(SiteId::new("main").to_string(), "main");
}

#[test]
fn test_identifiers_serialize_transparently() {
    let plugin = PluginUid::from("sample");
    let json = serde_json::to_string(&plugin).unwrap();
    assert_eq!(json, r#""sample""#);

    let site: SiteId = serde_json::from_str(r#""main""#).unwrap();
    assert_eq!(site, SiteId::new("main"));
}
