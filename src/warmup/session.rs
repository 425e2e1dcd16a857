//! Session-level orchestration.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio_util::sync::CancellationToken;

use crate::browser::Browser;
use crate::config::WarmerConfig;
use crate::error::WarmupError;
use crate::warmup::catalog::default_warmup_sites;
use crate::warmup::report::{SessionReport, SiteReport};
use crate::warmup::score::trust_score;
use crate::warmup::site::warm_site_with_cancel;
use crate::warmup::timing;

/// Warms a browser session across an ordered list of sites.
///
/// Sites are visited strictly in order on a single task, with randomized
/// pacing between visits - one continuous human session, not parallel
/// automation. A failed site is recorded and iteration continues; the
/// aggregate report always comes back rather than an error, as long as the
/// browser handle itself is alive.
///
/// The random source is injectable so tests can pin sequencing and counts
/// with a seeded generator.
pub struct SessionWarmer<R = StdRng> {
    config: WarmerConfig,
    rng: R,
    cancel: CancellationToken,
}

impl SessionWarmer<StdRng> {
    pub fn new(config: WarmerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl Default for SessionWarmer<StdRng> {
    fn default() -> Self {
        Self::new(WarmerConfig::default())
    }
}

impl<R: Rng + Send> SessionWarmer<R> {
    /// Build a warmer over a caller-supplied random source.
    pub fn with_rng(config: WarmerConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            cancel: CancellationToken::new(),
        }
    }

    /// A token that cancels the session cooperatively: the in-progress
    /// visit is abandoned (its page still closed), no further sites are
    /// scheduled, and the report reflects completed visits only.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Warm every site in the list, in order.
    pub async fn warm_session(&mut self, browser: &dyn Browser, sites: &[String]) -> SessionReport {
        if let Some(position) = sites.iter().position(|s| s.trim().is_empty()) {
            let error = WarmupError::InvalidSites(format!("entry {} is blank", position));
            tracing::error!("Session warming failed: {}", error);
            return SessionReport::failed(sites.len(), error.to_string());
        }

        tracing::info!(
            "Starting session warmup for {} sites, advisory budget {}min",
            sites.len(),
            self.config.session_minutes
        );

        let started = Instant::now();
        let mut results: Vec<SiteReport> = Vec::with_capacity(sites.len());

        for (i, site) in sites.iter().enumerate() {
            if self.cancel.is_cancelled() {
                tracing::info!("Session warmup cancelled before {}", site);
                break;
            }

            match warm_site_with_cancel(browser, site, &self.config, &mut self.rng, &self.cancel)
                .await
            {
                Some(report) => results.push(report),
                None => break,
            }

            if i + 1 < sites.len() && !self.cancel.is_cancelled() {
                timing::pause(self.config.between_sites, &mut self.rng).await;
            }
        }

        let total_duration_secs = started.elapsed().as_secs_f64();
        let sites_warmed = results.iter().filter(|r| r.success).count();
        let trust = trust_score(&results);

        tracing::info!(
            "Session warmup finished: {}/{} sites warmed, trust score {:.2}",
            sites_warmed,
            sites.len(),
            trust
        );

        SessionReport {
            success: sites_warmed > 0,
            sites_warmed,
            total_sites: sites.len(),
            total_duration_secs,
            results,
            trust_score: trust,
            error: None,
        }
    }

    /// Warm one site under this session's pacing and cancellation.
    pub async fn warm_site(&mut self, browser: &dyn Browser, url: &str) -> SiteReport {
        match warm_site_with_cancel(browser, url, &self.config, &mut self.rng, &self.cancel).await {
            Some(report) => report,
            None => SiteReport::failed(url, WarmupError::Cancelled.to_string()),
        }
    }

    /// Warm `steps` sites drawn (with replacement) from the built-in
    /// low-risk list, for callers with no site list of their own.
    pub async fn warm_default(&mut self, browser: &dyn Browser, steps: usize) -> SessionReport {
        let catalog = default_warmup_sites();
        let sites: Vec<String> = (0..steps)
            .filter_map(|_| catalog.choose(&mut self.rng).map(|s| (*s).to_string()))
            .collect();
        self.warm_session(browser, &sites).await
    }
}
