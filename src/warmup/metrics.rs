//! One-shot page metrics collection.

use serde::{Deserialize, Serialize};

use crate::browser::Page;

/// Performance and interaction counters captured once per site visit.
///
/// Every field defaults to zero so a partial or failed collection still
/// yields a well-formed record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    #[serde(default)]
    pub load_time_ms: f64,
    #[serde(default)]
    pub dom_content_loaded_ms: f64,
    #[serde(default)]
    pub page_height: u64,
    #[serde(default)]
    pub viewport_height: u64,
    #[serde(default)]
    pub links_count: u64,
    #[serde(default)]
    pub images_count: u64,
    #[serde(default)]
    pub forms_count: u64,
}

pub(crate) const METRICS_JS: &str = r#"(() => {
    const navigation = performance.getEntriesByType('navigation')[0];
    return {
        load_time_ms: navigation ? navigation.loadEventEnd - navigation.loadEventStart : 0,
        dom_content_loaded_ms: navigation ? navigation.domContentLoadedEventEnd - navigation.domContentLoadedEventStart : 0,
        page_height: document.body.scrollHeight,
        viewport_height: window.innerHeight,
        links_count: document.querySelectorAll('a').length,
        images_count: document.querySelectorAll('img').length,
        forms_count: document.querySelectorAll('form').length
    };
})()"#;

/// Collect metrics from the page. Collection failure is not a visit
/// failure; it degrades to `None`.
pub async fn collect(page: &dyn Page) -> Option<PageMetrics> {
    match page.evaluate(METRICS_JS).await {
        Ok(value) => match serde_json::from_value(value) {
            Ok(metrics) => Some(metrics),
            Err(e) => {
                tracing::debug!("Metrics payload did not parse: {}", e);
                None
            }
        },
        Err(e) => {
            tracing::debug!("Metrics collection failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_parses_with_zero_defaults() {
        let value = serde_json::json!({
            "page_height": 4200,
            "links_count": 37
        });
        let metrics: PageMetrics = serde_json::from_value(value).unwrap();
        assert_eq!(metrics.page_height, 4_200);
        assert_eq!(metrics.links_count, 37);
        assert_eq!(metrics.load_time_ms, 0.0);
        assert_eq!(metrics.forms_count, 0);
    }

    #[test]
    fn full_payload_roundtrips() {
        let metrics = PageMetrics {
            load_time_ms: 12.5,
            dom_content_loaded_ms: 3.0,
            page_height: 9000,
            viewport_height: 800,
            links_count: 120,
            images_count: 45,
            forms_count: 2,
        };
        let json = serde_json::to_value(&metrics).unwrap();
        let back: PageMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(back, metrics);
    }
}
