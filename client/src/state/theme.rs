//! Navigation-bar chrome derived from the active page and scroll offset.
//!
//! DESIGN
//! ======
//! `ThemeMode` is never stored. The shell recomputes it from its two source
//! signals, so a page change can never leave a stale theme behind while
//! waiting for the next scroll event.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::page::ActivePage;

/// Scroll distance (px) after which the home page switches to light chrome.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

pub const LOGO_WHITE_SRC: &str = "/eikon-partners-white.png";
pub const LOGO_BLUE_SRC: &str = "/eikon-partners-blue.png";

/// Presentation mode of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light text over the transparent bar on top of the home hero.
    DarkChrome,
    /// Dark text over an opaque light bar.
    LightChrome,
}

/// What the navbar shows in the brand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrandMark {
    Image { src: &'static str },
    /// Text/icon wordmark used once the logo image has failed to load.
    Wordmark,
}

/// Whether an `<img>` has already settled as broken. Browsers mark a failed
/// image `complete` with no intrinsic width, so this catches errors that fired
/// before hydration attached the `error` listener.
pub fn image_settled_broken(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

/// Combine page identity and scroll offset into the chrome mode.
///
/// Dark chrome only on the home page while `offset <= threshold`.
pub fn resolve_theme(page: ActivePage, offset: f64, threshold: f64) -> ThemeMode {
    if page == ActivePage::Home && offset <= threshold {
        ThemeMode::DarkChrome
    } else {
        ThemeMode::LightChrome
    }
}

impl ThemeMode {
    /// BEM modifier appended to `navbar`, `brand` and `nav-link` classes.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::DarkChrome => "dark-chrome",
            Self::LightChrome => "light-chrome",
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            Self::DarkChrome => LOGO_WHITE_SRC,
            Self::LightChrome => LOGO_BLUE_SRC,
        }
    }

    /// Stroke color of the mobile menu toggle icon. Always follows the bar.
    pub fn menu_icon_color(self) -> &'static str {
        match self {
            Self::DarkChrome => "#fff",
            Self::LightChrome => "#111",
        }
    }

    pub fn brand_mark(self, image_failed: bool) -> BrandMark {
        if image_failed {
            BrandMark::Wordmark
        } else {
            BrandMark::Image { src: self.logo_src() }
        }
    }

    pub fn navbar_class(self) -> String {
        format!("navbar navbar--{}", self.css_modifier())
    }

    /// Class for a desktop nav link; the active page is highlighted in
    /// either mode.
    pub fn nav_link_class(self, is_active: bool) -> String {
        if is_active {
            format!("nav-link nav-link--{} nav-link--active", self.css_modifier())
        } else {
            format!("nav-link nav-link--{}", self.css_modifier())
        }
    }
}
