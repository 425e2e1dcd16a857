//! Session-warming behavior engine.
//!
//! A warming session walks an ordered list of sites with one continuous
//! browser identity, runs a category-appropriate script of human-mimicking
//! behaviors on each, and aggregates the visits into a trust score.
//!
//! Layering, top down:
//! - [`session::SessionWarmer`] sequences site visits with randomized
//!   inter-site pacing and owns the aggregate result,
//! - [`site::warm_site`] performs one page-scoped visit,
//! - [`behavior::BehaviorExecutor`] runs one named interaction script,
//! - [`classifier`] and [`catalog`] pick which script list applies.

pub mod behavior;
pub mod catalog;
pub mod classifier;
pub mod metrics;
pub mod report;
pub mod score;
pub mod session;
pub mod site;
pub mod timing;

pub use behavior::{BehaviorExecutor, BehaviorOutcome};
pub use catalog::{behaviors_for, default_warmup_sites};
pub use classifier::SiteCategory;
pub use metrics::PageMetrics;
pub use report::{SessionReport, SiteReport};
pub use score::trust_score;
pub use session::SessionWarmer;
pub use site::warm_site;
pub use timing::DelayWindow;
