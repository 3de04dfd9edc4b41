//! Open/closed state of the collapsible mobile navigation panel.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Mobile menu toggle. Knows nothing about navigation; the shell closes it
/// when a link is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
