//! Last observed vertical scroll offset of the viewport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fed by the shell's `window` scroll listener and by the scroll-to-origin
//! effect after navigation. Only the theme resolver reads it.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollObserver {
    offset: f64,
}

impl ScrollObserver {
    pub fn offset(self) -> f64 {
        self.offset
    }

    /// Store a new offset. Negative (overscroll bounce) and non-finite values
    /// are clamped to `0.0`. Returns `true` when the stored value changed.
    pub fn record(&mut self, offset: f64) -> bool {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        if offset.to_bits() == self.offset.to_bits() {
            return false;
        }
        self.offset = offset;
        true
    }
}
