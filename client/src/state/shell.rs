//! State owned by the top-level shell and shared by the navbar and page body.
//!
//! DESIGN
//! ======
//! Descendants receive read-only signals and callbacks derived from this
//! container; only the shell calls the mutating methods. Menu closing on
//! navigation is wired here because `MobileMenu` itself has no notion of
//! pages.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use super::menu::MobileMenu;
use super::page::{ActivePage, ViewRouter};
use super::scroll::ScrollObserver;
use super::theme::{ThemeMode, resolve_theme};

#[derive(Clone, Debug, Default)]
pub struct ShellState {
    pub router: ViewRouter,
    pub menu: MobileMenu,
}

impl ShellState {
    pub fn active_page(&self) -> ActivePage {
        self.router.active()
    }

    /// Follow a navigation link: switch page and force the mobile menu shut.
    pub fn select_page(&mut self, page: ActivePage) {
        self.router.navigate(page);
        self.menu.close();
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn theme(&self, scroll: ScrollObserver, threshold: f64) -> ThemeMode {
        resolve_theme(self.router.active(), scroll.offset(), threshold)
    }

    /// One post-render pass of the scroll-to-top effect.
    ///
    /// `seen` is the transition count carried from the previous pass (`None`
    /// on mount). When a navigation happened since then, `scroll` is reset to
    /// the origin and the returned `ScrollSettle::jump` asks the caller to
    /// move the viewport. Navigating to the already-active page counts.
    pub fn settle_scroll(&self, seen: Option<u64>, scroll: &mut ScrollObserver) -> ScrollSettle {
        let transitions = self.router.transitions();
        let jump = seen.is_some_and(|prev| prev != transitions);
        if jump {
            scroll.record(0.0);
        }
        ScrollSettle { transitions, jump }
    }
}

/// Outcome of [`ShellState::settle_scroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSettle {
    /// Transition count to carry into the next pass.
    pub transitions: u64,
    pub jump: bool,
}
