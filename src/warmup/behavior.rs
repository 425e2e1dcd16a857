//! Scripted human-mimicking behaviors.
//!
//! Each behavior is a self-contained interaction pattern with randomized
//! repetition and pacing. Failures never cross the executor boundary:
//! a missing selector is a silent no-op, a single element acting up is
//! skipped, and a behavior that dies mid-script is reported as
//! [`BehaviorOutcome::Failed`] without disturbing the rest of the visit.

use std::time::Duration;

use rand::seq::index;
use rand::Rng;
use tokio::time::sleep;

use crate::browser::Page;
use crate::config::WarmerConfig;
use crate::error::Result;
use crate::warmup::timing::DelayWindow;

/// Elements worth hovering to signal interest.
const HOVERABLE_SELECTOR: &str = "a, button, [role=\"button\"], .btn";

/// Text blocks a reader would linger on.
const READABLE_SELECTOR: &str = "p, h1, h2, h3, article, .content";

/// Candidate selectors for category navigation, tried in order.
const CATEGORY_SELECTORS: &[&str] = &[
    "nav a",
    ".category",
    ".menu a",
    "[data-category]",
    ".nav-link",
    ".category-link",
];

/// Candidate selectors for product links, tried in order.
const PRODUCT_SELECTORS: &[&str] = &[
    ".product a",
    "[data-product]",
    ".item a",
    ".product-link",
    ".product-card a",
];

/// Navigational links that are safe to follow and return from: no mail/tel
/// schemes, nothing that smells like logout or deletion, nothing inside a
/// form.
const SAFE_LINKS_JS: &str = r#"Array.from(document.querySelectorAll('a[href]'))
    .filter(link => {
        const href = link.getAttribute('href');
        return href &&
               !href.startsWith('mailto:') &&
               !href.startsWith('tel:') &&
               !href.includes('logout') &&
               !href.includes('delete') &&
               !link.closest('form');
    })"#;

/// How a single behavior ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorOutcome {
    /// The full script ran; the behavior counts as executed.
    Completed,
    /// The script died partway; logged, not counted, visit continues.
    Failed,
    /// The name is not in the vocabulary; logged, nothing ran.
    Unknown,
}

/// Runs one named behavior against a page.
pub struct BehaviorExecutor<'a, R: Rng> {
    page: &'a dyn Page,
    config: &'a WarmerConfig,
    rng: &'a mut R,
}

impl<'a, R: Rng> BehaviorExecutor<'a, R> {
    pub fn new(page: &'a dyn Page, config: &'a WarmerConfig, rng: &'a mut R) -> Self {
        Self { page, config, rng }
    }

    /// Execute a behavior by name. Never returns an error: outcomes are
    /// tagged and failures are contained here.
    pub async fn execute(&mut self, name: &str) -> BehaviorOutcome {
        let run = match name {
            "scroll_random" => self.scroll_random().await,
            "hover_elements" => self.hover_elements().await,
            "click_safe_links" => self.click_safe_links().await,
            "read_content" => self.read_content().await,
            "browse_categories" => self.browse_categories().await,
            "view_products" => self.view_products().await,
            "scroll_feed" => self.scroll_feed().await,
            _ => {
                tracing::warn!("Unknown behavior: {}", name);
                return BehaviorOutcome::Unknown;
            }
        };

        match run {
            Ok(()) => BehaviorOutcome::Completed,
            Err(e) => {
                tracing::warn!("Behavior {} did not fully execute: {}", name, e);
                BehaviorOutcome::Failed
            }
        }
    }

    async fn pause(&mut self, window: DelayWindow) {
        let delay = window.sample(&mut *self.rng);
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }

    /// Scroll down the page in uneven steps, pausing like a reader.
    async fn scroll_random(&mut self) -> Result<()> {
        let viewport = self
            .page
            .evaluate("window.innerHeight")
            .await?
            .as_f64()
            .unwrap_or(720.0) as i64;

        let steps = self.rng.gen_range(3..=8);
        for _ in 0..steps {
            let distance = self.rng.gen_range(100..=(viewport / 2).max(100));
            self.page
                .evaluate(&format!(
                    "window.scrollBy({{ top: {distance}, behavior: 'smooth' }})"
                ))
                .await?;
            self.pause(self.config.scroll_pause).await;
        }
        Ok(())
    }

    /// Hover a small random sample of interactive elements.
    async fn hover_elements(&mut self) -> Result<()> {
        let elements = self.page.query_all(HOVERABLE_SELECTOR).await?;
        if elements.is_empty() {
            return Ok(());
        }

        let take = self.rng.gen_range(2..=4).min(elements.len());
        for i in index::sample(&mut *self.rng, elements.len(), take) {
            if let Err(e) = elements[i].hover().await {
                tracing::debug!("Hover skipped: {}", e);
                continue;
            }
            self.pause(self.config.hover_pause).await;
        }
        Ok(())
    }

    /// Follow one or two safe links, dwell, and come back.
    ///
    /// The candidate set is recomputed each round: navigating back restores
    /// the document but invalidates anything queried from the old one.
    async fn click_safe_links(&mut self) -> Result<()> {
        let rounds = self.rng.gen_range(1..=2);
        for _ in 0..rounds {
            let count = self
                .page
                .evaluate(&format!("{SAFE_LINKS_JS}.length"))
                .await?
                .as_u64()
                .unwrap_or(0);
            if count == 0 {
                return Ok(());
            }

            let pick = self.rng.gen_range(0..count.min(10));
            let click = format!(
                "(() => {{ const links = {SAFE_LINKS_JS}; if (links[{pick}]) links[{pick}].click(); }})()"
            );
            if let Err(e) = self.page.evaluate(&click).await {
                tracing::debug!("Safe link click skipped: {}", e);
                continue;
            }

            self.pause(self.config.link_dwell).await;
            if let Err(e) = self.page.go_back().await {
                tracing::debug!("Could not navigate back after link click: {}", e);
                return Ok(());
            }
            self.pause(self.config.back_settle).await;
        }
        Ok(())
    }

    /// Linger on a few text blocks for a time proportional to their length.
    async fn read_content(&mut self) -> Result<()> {
        let blocks = self.page.query_all(READABLE_SELECTOR).await?;
        if blocks.is_empty() {
            return Ok(());
        }

        let take = self.rng.gen_range(2..=3).min(blocks.len());
        for i in index::sample(&mut *self.rng, blocks.len(), take) {
            let block = &blocks[i];
            if let Err(e) = block.scroll_into_view().await {
                tracing::debug!("Could not bring text block into view: {}", e);
                continue;
            }

            let text = match block.text_content().await {
                Ok(text) => text.unwrap_or_default(),
                Err(e) => {
                    tracing::debug!("Could not read text block: {}", e);
                    continue;
                }
            };
            if text.is_empty() {
                continue;
            }

            let base_secs = (text.chars().count() as f64 / self.config.reading_chars_per_sec)
                .min(self.config.reading_cap_secs);
            let reading = base_secs * self.rng.gen_range(0.5..1.5);
            if reading > 0.0 {
                sleep(Duration::from_secs_f64(reading)).await;
            }
        }
        Ok(())
    }

    /// Open a category page from the first navigation structure found.
    async fn browse_categories(&mut self) -> Result<()> {
        for selector in CATEGORY_SELECTORS {
            let elements = match self.page.query_all(selector).await {
                Ok(elements) => elements,
                Err(e) => {
                    tracing::debug!("Category selector {} failed: {}", selector, e);
                    continue;
                }
            };
            if elements.is_empty() {
                continue;
            }

            let pick = self.rng.gen_range(0..elements.len().min(10));
            if let Err(e) = elements[pick].click().await {
                tracing::debug!("Category click skipped: {}", e);
                continue;
            }
            self.pause(self.config.category_dwell).await;
            break;
        }
        Ok(())
    }

    /// Open one or two product pages, dwell, and come back.
    async fn view_products(&mut self) -> Result<()> {
        for selector in PRODUCT_SELECTORS {
            let elements = match self.page.query_all(selector).await {
                Ok(elements) => elements,
                Err(e) => {
                    tracing::debug!("Product selector {} failed: {}", selector, e);
                    continue;
                }
            };
            if elements.is_empty() {
                continue;
            }

            let rounds = self.rng.gen_range(1..=2).min(elements.len());
            for _ in 0..rounds {
                let pick = self.rng.gen_range(0..elements.len().min(5));
                if let Err(e) = elements[pick].click().await {
                    tracing::debug!("Product click skipped: {}", e);
                    continue;
                }
                self.pause(self.config.product_dwell).await;
                if let Err(e) = self.page.go_back().await {
                    tracing::debug!("Could not navigate back from product: {}", e);
                    break;
                }
                self.pause(self.config.product_back).await;
            }
            break;
        }
        Ok(())
    }

    /// Endless-feed scrolling with the occasional backtrack.
    async fn scroll_feed(&mut self) -> Result<()> {
        let steps = self.rng.gen_range(5..=10);
        for _ in 0..steps {
            self.page
                .evaluate("window.scrollBy(0, window.innerHeight * 0.8)")
                .await?;
            self.pause(self.config.feed_pause).await;

            if self.rng.gen_bool(0.3) {
                self.page
                    .evaluate("window.scrollBy(0, -window.innerHeight * 0.3)")
                    .await?;
                self.pause(self.config.feed_backtrack).await;
            }
        }
        Ok(())
    }
}
