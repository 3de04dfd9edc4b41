use super::*;

// =============================================================
// ActivePage
// =============================================================

#[test]
fn active_page_default_is_home() {
    assert_eq!(ActivePage::default(), ActivePage::Home);
}

#[test]
fn navigable_pages_exclude_team() {
    assert_eq!(ActivePage::NAVIGABLE, [ActivePage::Home, ActivePage::Contact]);
    assert!(!ActivePage::NAVIGABLE.contains(&ActivePage::Team));
}

#[test]
fn labels_match_navigation_copy() {
    assert_eq!(ActivePage::Home.nav_label(), "Home");
    assert_eq!(ActivePage::Contact.nav_label(), "Contact");
    assert_eq!(ActivePage::Contact.footer_label(), "Contact Us");
    assert_eq!(ActivePage::Team.footer_label(), "The Team");
}

// =============================================================
// ViewRouter
// =============================================================

#[test]
fn router_starts_on_home_with_no_transitions() {
    let router = ViewRouter::default();
    assert_eq!(router.active(), ActivePage::Home);
    assert_eq!(router.transitions(), 0);
}

#[test]
fn navigate_switches_active_page() {
    let mut router = ViewRouter::default();
    router.navigate(ActivePage::Contact);
    assert_eq!(router.active(), ActivePage::Contact);
    assert_eq!(router.transitions(), 1);
}

#[test]
fn navigate_to_current_page_still_counts_as_transition() {
    let mut router = ViewRouter::default();
    router.navigate(ActivePage::Home);
    router.navigate(ActivePage::Home);
    assert_eq!(router.active(), ActivePage::Home);
    assert_eq!(router.transitions(), 2);
}

#[test]
fn navigate_accepts_unrouted_team_page() {
    let mut router = ViewRouter::default();
    router.navigate(ActivePage::Team);
    assert_eq!(router.active(), ActivePage::Team);
}
