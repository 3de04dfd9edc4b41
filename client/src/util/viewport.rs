//! Viewport scroll read/write.
//!
//! Browser calls only exist under `hydrate`; SSR and native tests see a
//! viewport permanently at the origin.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Jump the window to `(0, 0)`.
pub fn scroll_to_origin() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
