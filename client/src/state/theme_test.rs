use super::*;

const T: f64 = DEFAULT_SCROLL_THRESHOLD;

// =============================================================
// resolve_theme
// =============================================================

#[test]
fn non_home_pages_are_always_light_chrome() {
    for page in [ActivePage::Team, ActivePage::Contact] {
        for offset in [0.0, 50.0, 51.0, 10_000.0] {
            assert_eq!(resolve_theme(page, offset, T), ThemeMode::LightChrome, "{page:?} @ {offset}");
        }
    }
}

#[test]
fn home_is_dark_chrome_up_to_and_including_threshold() {
    assert_eq!(resolve_theme(ActivePage::Home, 0.0, T), ThemeMode::DarkChrome);
    assert_eq!(resolve_theme(ActivePage::Home, 50.0, T), ThemeMode::DarkChrome);
}

#[test]
fn home_flips_to_light_chrome_past_threshold() {
    assert_eq!(resolve_theme(ActivePage::Home, 51.0, T), ThemeMode::LightChrome);
    assert_eq!(resolve_theme(ActivePage::Home, 200.0, T), ThemeMode::LightChrome);
}

#[test]
fn resolve_theme_honors_custom_threshold() {
    assert_eq!(resolve_theme(ActivePage::Home, 80.0, 100.0), ThemeMode::DarkChrome);
    assert_eq!(resolve_theme(ActivePage::Home, 101.0, 100.0), ThemeMode::LightChrome);
}

#[test]
fn resolve_theme_is_stable_for_identical_inputs() {
    let first = resolve_theme(ActivePage::Home, 42.0, T);
    for _ in 0..10 {
        assert_eq!(resolve_theme(ActivePage::Home, 42.0, T), first);
    }
}

// =============================================================
// Derived chrome
// =============================================================

#[test]
fn logo_and_menu_icon_follow_theme() {
    assert_eq!(ThemeMode::DarkChrome.logo_src(), LOGO_WHITE_SRC);
    assert_eq!(ThemeMode::LightChrome.logo_src(), LOGO_BLUE_SRC);
    assert_eq!(ThemeMode::DarkChrome.menu_icon_color(), "#fff");
    assert_eq!(ThemeMode::LightChrome.menu_icon_color(), "#111");
}

#[test]
fn brand_mark_falls_back_to_wordmark_after_image_failure() {
    for theme in [ThemeMode::DarkChrome, ThemeMode::LightChrome] {
        assert_eq!(theme.brand_mark(true), BrandMark::Wordmark);
        assert_eq!(theme.brand_mark(false), BrandMark::Image { src: theme.logo_src() });
    }
}

#[test]
fn css_classes_carry_theme_modifier() {
    assert_eq!(ThemeMode::DarkChrome.navbar_class(), "navbar navbar--dark-chrome");
    assert_eq!(ThemeMode::LightChrome.nav_link_class(false), "nav-link nav-link--light-chrome");
    assert_eq!(
        ThemeMode::LightChrome.nav_link_class(true),
        "nav-link nav-link--light-chrome nav-link--active"
    );
}

#[test]
fn image_settled_broken_only_for_complete_images_without_width() {
    assert!(image_settled_broken(true, 0));
    assert!(!image_settled_broken(true, 240));
    // Still loading: the `error` listener will see the outcome.
    assert!(!image_settled_broken(false, 0));
}

#[test]
fn broken_image_seen_after_hydration_selects_wordmark() {
    let failed = image_settled_broken(true, 0);
    for mode in [ThemeMode::DarkChrome, ThemeMode::LightChrome] {
        assert_eq!(mode.brand_mark(failed), BrandMark::Wordmark);
    }
}
