//! Result records produced by a warming session.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::classifier::SiteCategory;
use super::metrics::PageMetrics;

/// The outcome of warming one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteReport {
    pub site: String,
    pub success: bool,
    #[serde(default)]
    pub duration_secs: f64,
    #[serde(default)]
    pub behaviors_executed: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SiteCategory>,
    /// Always serialized; an uncollected value appears as an empty map so
    /// downstream consumers never see a missing key.
    #[serde(default, serialize_with = "metrics_or_empty_map")]
    pub metrics: Option<PageMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SiteReport {
    /// A completed visit.
    pub fn completed(
        site: impl Into<String>,
        duration_secs: f64,
        behaviors_executed: Vec<String>,
        category: SiteCategory,
        metrics: Option<PageMetrics>,
    ) -> Self {
        Self {
            site: site.into(),
            success: true,
            duration_secs,
            behaviors_executed,
            category: Some(category),
            metrics,
            error: None,
        }
    }

    /// A visit that failed before producing anything useful.
    pub fn failed(site: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            success: false,
            duration_secs: 0.0,
            behaviors_executed: Vec::new(),
            category: None,
            metrics: None,
            error: Some(error.into()),
        }
    }
}

/// The aggregate outcome of one warming session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub success: bool,
    pub sites_warmed: usize,
    pub total_sites: usize,
    pub total_duration_secs: f64,
    #[serde(default)]
    pub results: Vec<SiteReport>,
    pub trust_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionReport {
    /// A session that never got as far as visiting sites.
    pub fn failed(total_sites: usize, error: impl Into<String>) -> Self {
        Self {
            success: false,
            sites_warmed: 0,
            total_sites,
            total_duration_secs: 0.0,
            results: Vec::new(),
            trust_score: 0.0,
            error: Some(error.into()),
        }
    }
}

fn metrics_or_empty_map<S>(metrics: &Option<PageMetrics>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match metrics {
        Some(m) => m.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
