//! Warmer configuration.
//!
//! Every randomized pacing window the engine samples lives here so callers
//! (and tests) can tighten or zero them without touching behavior code.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WarmupError};
use crate::warmup::timing::DelayWindow;

/// Configuration for a warming session.
///
/// The defaults reproduce the pacing of a casual human browsing session.
/// Use [`WarmerConfig::fast`] in tests to strip the wall-clock delays while
/// keeping repetition counts and sequencing intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WarmerConfig {
    /// Bound on a single page navigation (DOMContentLoaded), in milliseconds
    pub navigation_timeout_ms: u64,

    /// Pause after navigation while the page stabilizes
    pub settle: DelayWindow,

    /// Pause between consecutive behaviors on one site
    pub between_behaviors: DelayWindow,

    /// Pause between consecutive sites in a session
    pub between_sites: DelayWindow,

    /// Pause between individual scroll steps
    pub scroll_pause: DelayWindow,

    /// Dwell time on a hovered element
    pub hover_pause: DelayWindow,

    /// Dwell time on a page opened through a safe link
    pub link_dwell: DelayWindow,

    /// Pause after navigating back from a safe link
    pub back_settle: DelayWindow,

    /// Pause after clicking a category link
    pub category_dwell: DelayWindow,

    /// Dwell time on an opened product page
    pub product_dwell: DelayWindow,

    /// Pause after navigating back from a product page
    pub product_back: DelayWindow,

    /// Pause between feed scroll steps
    pub feed_pause: DelayWindow,

    /// Pause after an occasional backwards feed scroll
    pub feed_backtrack: DelayWindow,

    /// Simulated reading speed in characters per second
    pub reading_chars_per_sec: f64,

    /// Upper bound on a single simulated reading pause, in seconds
    pub reading_cap_secs: f64,

    /// Advisory session budget in minutes, logged at session start.
    /// Sequencing is driven by the site list, not this value.
    pub session_minutes: u64,
}

impl Default for WarmerConfig {
    fn default() -> Self {
        Self {
            navigation_timeout_ms: 30_000,
            settle: DelayWindow::new(1_000, 3_000),
            between_behaviors: DelayWindow::new(500, 2_000),
            between_sites: DelayWindow::new(2_000, 8_000),
            scroll_pause: DelayWindow::new(800, 2_500),
            hover_pause: DelayWindow::new(300, 1_000),
            link_dwell: DelayWindow::new(1_000, 3_000),
            back_settle: DelayWindow::new(500, 1_500),
            category_dwell: DelayWindow::new(1_000, 3_000),
            product_dwell: DelayWindow::new(2_000, 4_000),
            product_back: DelayWindow::new(1_000, 2_000),
            feed_pause: DelayWindow::new(1_000, 3_000),
            feed_backtrack: DelayWindow::new(500, 1_500),
            reading_chars_per_sec: 200.0,
            reading_cap_secs: 5.0,
            session_minutes: 5,
        }
    }
}

impl WarmerConfig {
    /// Load configuration from `warmup.toml` and `WARMUP_*` environment
    /// variables layered over the defaults.
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(WarmerConfig::default()))
            .merge(Toml::file("warmup.toml"))
            .merge(Env::prefixed("WARMUP_"))
            .extract()
            .map_err(|e| WarmupError::Config(e.to_string()))
    }

    /// A profile with every pacing delay zeroed (for tests).
    pub fn fast() -> Self {
        Self {
            settle: DelayWindow::zero(),
            between_behaviors: DelayWindow::zero(),
            between_sites: DelayWindow::zero(),
            scroll_pause: DelayWindow::zero(),
            hover_pause: DelayWindow::zero(),
            link_dwell: DelayWindow::zero(),
            back_settle: DelayWindow::zero(),
            category_dwell: DelayWindow::zero(),
            product_dwell: DelayWindow::zero(),
            product_back: DelayWindow::zero(),
            feed_pause: DelayWindow::zero(),
            feed_backtrack: DelayWindow::zero(),
            reading_cap_secs: 0.0,
            ..Self::default()
        }
    }

    /// A slow, careful browsing profile.
    pub fn slow() -> Self {
        Self {
            settle: DelayWindow::new(2_000, 5_000),
            between_behaviors: DelayWindow::new(1_000, 4_000),
            between_sites: DelayWindow::new(4_000, 12_000),
            scroll_pause: DelayWindow::new(1_500, 4_000),
            hover_pause: DelayWindow::new(500, 1_500),
            reading_chars_per_sec: 150.0,
            reading_cap_secs: 8.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pacing_is_humanlike() {
        let config = WarmerConfig::default();
        assert_eq!(config.navigation_timeout_ms, 30_000);
        assert_eq!(config.settle.min_ms, 1_000);
        assert_eq!(config.settle.max_ms, 3_000);
        assert_eq!(config.between_sites.max_ms, 8_000);
        assert_eq!(config.session_minutes, 5);
    }

    #[test]
    fn fast_profile_zeroes_all_delays() {
        let config = WarmerConfig::fast();
        assert!(config.settle.is_zero());
        assert!(config.between_behaviors.is_zero());
        assert!(config.between_sites.is_zero());
        assert!(config.scroll_pause.is_zero());
        assert!(config.feed_pause.is_zero());
        assert_eq!(config.reading_cap_secs, 0.0);
        // Navigation is still bounded, not disabled
        assert_eq!(config.navigation_timeout_ms, 30_000);
    }

    #[test]
    fn slow_profile_stretches_pacing() {
        let fast = WarmerConfig::default();
        let slow = WarmerConfig::slow();
        assert!(slow.settle.min_ms > fast.settle.min_ms);
        assert!(slow.between_sites.max_ms > fast.between_sites.max_ms);
        assert!(slow.reading_cap_secs > fast.reading_cap_secs);
    }

    #[test]
    fn config_roundtrips_through_serde() {
        let config = WarmerConfig::slow();
        let json = serde_json::to_string(&config).unwrap();
        let back: WarmerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.settle.min_ms, config.settle.min_ms);
        assert_eq!(back.reading_chars_per_sec, config.reading_chars_per_sec);
    }
}
