//! Single-site warming.

use std::time::{Duration, Instant};

use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::browser::{Browser, Page};
use crate::config::WarmerConfig;
use crate::error::{Result, WarmupError};
use crate::warmup::behavior::{BehaviorExecutor, BehaviorOutcome};
use crate::warmup::catalog::behaviors_for;
use crate::warmup::classifier::SiteCategory;
use crate::warmup::metrics::{self, PageMetrics};
use crate::warmup::report::SiteReport;
use crate::warmup::timing;

/// Warm a single site: open a page, navigate, settle, run the behavior
/// script for the site's category, collect metrics, close the page.
///
/// Always returns a report; any failure that escapes behavior-level
/// containment is converted into a failure record here. The page is
/// released on every exit path.
pub async fn warm_site<R: Rng + Send>(
    browser: &dyn Browser,
    url: &str,
    config: &WarmerConfig,
    rng: &mut R,
) -> SiteReport {
    let never = CancellationToken::new();
    warm_site_with_cancel(browser, url, config, rng, &never)
        .await
        .unwrap_or_else(|| SiteReport::failed(url, WarmupError::Cancelled.to_string()))
}

/// Cancellation-aware visit. Returns `None` when the token fired mid-visit:
/// the page has been closed and nothing useful was produced, so the caller
/// records nothing.
pub(crate) async fn warm_site_with_cancel<R: Rng + Send>(
    browser: &dyn Browser,
    url: &str,
    config: &WarmerConfig,
    rng: &mut R,
    cancel: &CancellationToken,
) -> Option<SiteReport> {
    let url = normalize_site_url(url);
    tracing::info!("Warming site: {}", url);

    let page = match browser.new_page().await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to warm {}: {}", url, e);
            return Some(SiteReport::failed(url, e.to_string()));
        }
    };

    let started = Instant::now();
    let outcome = visit(page.as_ref(), &url, config, rng, cancel).await;

    if let Err(e) = page.close().await {
        tracing::debug!("Page close failed for {}: {}", url, e);
    }

    match outcome {
        Ok((behaviors_executed, category, collected)) => {
            let duration_secs = started.elapsed().as_secs_f64();
            tracing::info!(
                "Warmed {} in {:.1}s ({} behaviors)",
                url,
                duration_secs,
                behaviors_executed.len()
            );
            Some(SiteReport::completed(
                url,
                duration_secs,
                behaviors_executed,
                category,
                collected,
            ))
        }
        Err(WarmupError::Cancelled) => {
            tracing::info!("Visit to {} abandoned, cancellation requested", url);
            None
        }
        Err(e) => {
            tracing::error!("Failed to warm {}: {}", url, e);
            Some(SiteReport::failed(url, e.to_string()))
        }
    }
}

async fn visit<R: Rng + Send>(
    page: &dyn Page,
    url: &str,
    config: &WarmerConfig,
    rng: &mut R,
    cancel: &CancellationToken,
) -> Result<(Vec<String>, SiteCategory, Option<PageMetrics>)> {
    if cancel.is_cancelled() {
        return Err(WarmupError::Cancelled);
    }

    page.goto(url, Duration::from_millis(config.navigation_timeout_ms))
        .await?;
    timing::pause(config.settle, rng).await;

    let category = SiteCategory::classify(url);
    let script = behaviors_for(category);
    tracing::debug!(
        "Classified {} as {}, {} behaviors queued",
        url,
        category,
        script.len()
    );

    let mut behaviors_executed = Vec::new();
    for (i, name) in script.iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(WarmupError::Cancelled);
        }

        let mut executor = BehaviorExecutor::new(page, config, rng);
        if executor.execute(name).await == BehaviorOutcome::Completed {
            behaviors_executed.push((*name).to_string());
        }

        if i + 1 < script.len() {
            timing::pause(config.between_behaviors, rng).await;
        }
    }

    let collected = metrics::collect(page).await;
    Ok((behaviors_executed, category, collected))
}

/// Give scheme-less entries an https:// prefix so the site list can hold
/// bare hosts.
pub(crate) fn normalize_site_url(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix("//") {
        return format!("https://{}", rest);
    }
    if trimmed.contains("://") || has_explicit_scheme(trimmed) {
        return trimmed.to_string();
    }
    format!("https://{}", trimmed)
}

fn has_explicit_scheme(input: &str) -> bool {
    let mut chars = input.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    for c in chars {
        if c == ':' {
            return true;
        }
        if c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.' {
            continue;
        }
        return false;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hosts_get_https() {
        assert_eq!(
            normalize_site_url("example.org/path"),
            "https://example.org/path"
        );
        assert_eq!(normalize_site_url("  example.org  "), "https://example.org");
    }

    #[test]
    fn explicit_schemes_pass_through() {
        assert_eq!(
            normalize_site_url("http://example.org"),
            "http://example.org"
        );
        assert_eq!(normalize_site_url("about:blank"), "about:blank");
    }

    #[test]
    fn protocol_relative_urls_become_https() {
        assert_eq!(
            normalize_site_url("//cdn.example.org"),
            "https://cdn.example.org"
        );
    }
}
