use super::*;

#[test]
fn site_config_defaults_match_reference_behavior() {
    let config = SiteConfig::default();
    assert_eq!(config.inquiry_delay, Duration::from_millis(1500));
    assert_eq!(config.scroll_threshold, 50.0);
}

#[test]
fn from_raw_without_overrides_uses_defaults() {
    assert_eq!(SiteConfig::from_raw(None, None), SiteConfig::default());
}

#[test]
fn from_raw_applies_valid_overrides() {
    let config = SiteConfig::from_raw(Some(" 250 "), Some("80.5"));
    assert_eq!(config.inquiry_delay, Duration::from_millis(250));
    assert_eq!(config.scroll_threshold, 80.5);
}

#[test]
fn from_raw_ignores_garbage() {
    let config = SiteConfig::from_raw(Some("soon"), Some("-4"));
    assert_eq!(config, SiteConfig::default());
    assert_eq!(SiteConfig::from_raw(None, Some("inf")).scroll_threshold, 50.0);
}
