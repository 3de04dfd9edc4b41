//! Active-page identity and the in-memory view router.
//!
//! DESIGN
//! ======
//! The site never changes the browser address. "Pages" are variants of a
//! single tagged enum so two pages can never be flagged active at once, and
//! every transition is counted so the shell can run its post-render
//! scroll-to-top effect even when the target equals the current page.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Logical page currently composed into `<main>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActivePage {
    #[default]
    Home,
    /// Partner gallery. Fully rendered but intentionally not linked anywhere.
    Team,
    Contact,
}

impl ActivePage {
    /// Pages reachable from the navigation bar, mobile panel, and footer.
    pub const NAVIGABLE: [ActivePage; 2] = [ActivePage::Home, ActivePage::Contact];

    /// Label used by the navigation bar and mobile panel.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Team => "Team",
            Self::Contact => "Contact",
        }
    }

    /// Label used by the footer navigation column.
    pub fn footer_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Team => "The Team",
            Self::Contact => "Contact Us",
        }
    }
}

/// Single source of truth for the active page.
#[derive(Clone, Debug, Default)]
pub struct ViewRouter {
    active: ActivePage,
    transitions: u64,
}

impl ViewRouter {
    pub fn active(&self) -> ActivePage {
        self.active
    }

    /// Number of `navigate` calls so far. The shell watches this to schedule
    /// scroll-to-origin after each transition has rendered.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Switch to `page`. Accepted unconditionally, including the current page.
    pub fn navigate(&mut self, page: ActivePage) {
        self.active = page;
        self.transitions = self.transitions.wrapping_add(1);
    }
}
