//! Session warming engine for CDP-driven browsers.
//!
//! Establishes session legitimacy before sensitive automation by walking a
//! list of sites the way a human would: classify each site, run a
//! category-appropriate script of randomized interactions (scrolling,
//! hovering, safe-link clicks, simulated reading), and aggregate the visits
//! into a structured report with a [0, 1] trust score.
//!
//! The engine owns no browser. Callers hold a live handle and pass it in
//! behind the [`browser::Browser`] trait; [`browser::CdpBrowser`] adapts a
//! connected [`chromiumoxide::Browser`].
//!
//! ```no_run
//! use warmup_engine::{CdpBrowser, SessionWarmer, WarmerConfig};
//!
//! # async fn run(browser: chromiumoxide::Browser) {
//! let browser = CdpBrowser::new(browser);
//! let mut warmer = SessionWarmer::new(WarmerConfig::default());
//! let sites = vec!["https://www.wikipedia.org".to_string()];
//! let report = warmer.warm_session(&browser, &sites).await;
//! println!("trust score: {:.2}", report.trust_score);
//! # }
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod warmup;

pub use browser::{Browser, CdpBrowser, Element, Page};
pub use config::WarmerConfig;
pub use error::{Result, WarmupError};
pub use warmup::{
    behaviors_for, default_warmup_sites, trust_score, warm_site, BehaviorExecutor, BehaviorOutcome,
    DelayWindow, PageMetrics, SessionReport, SessionWarmer, SiteCategory, SiteReport,
};
