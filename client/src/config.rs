//! Build-time site configuration.
//!
//! Values are baked in when the WASM bundle is compiled:
//!
//! - `EIKON_INQUIRY_DELAY_MS`: simulated inquiry latency (default 1500).
//! - `EIKON_SCROLL_THRESHOLD`: home-page scroll distance before the navbar
//!   turns opaque (default 50).
//!
//! Unparseable values fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::net::inquiry::DEFAULT_INQUIRY_DELAY;
use crate::state::theme::DEFAULT_SCROLL_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub inquiry_delay: Duration,
    pub scroll_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { inquiry_delay: DEFAULT_INQUIRY_DELAY, scroll_threshold: DEFAULT_SCROLL_THRESHOLD }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("EIKON_INQUIRY_DELAY_MS"), option_env!("EIKON_SCROLL_THRESHOLD"))
    }

    fn from_raw(delay_ms: Option<&str>, threshold: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            inquiry_delay: parse_delay_ms(delay_ms).unwrap_or(defaults.inquiry_delay),
            scroll_threshold: parse_threshold(threshold).unwrap_or(defaults.scroll_threshold),
        }
    }
}

fn parse_delay_ms(raw: Option<&str>) -> Option<Duration> {
    raw?.trim().parse::<u64>().ok().map(Duration::from_millis)
}

fn parse_threshold(raw: Option<&str>) -> Option<f64> {
    raw?.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
