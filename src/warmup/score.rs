//! Trust-score aggregation.

use std::collections::BTreeSet;

use super::report::SiteReport;

/// Score a session's site results into [0.0, 1.0].
///
/// Three additive components:
/// - success rate across all attempted sites, weighted 0.6,
/// - behavioral diversity: 0.05 per distinct behavior executed on a
///   successful site, capped at 0.3,
/// - average successful-visit duration, 1/60 per second, capped at 0.1.
///
/// No successful visit means 0.0. Pure aggregation; no randomness, no I/O.
pub fn trust_score(results: &[SiteReport]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }

    let successful: Vec<&SiteReport> = results.iter().filter(|r| r.success).collect();
    if successful.is_empty() {
        return 0.0;
    }

    let success_rate = successful.len() as f64 / results.len() as f64;
    let base_score = success_rate * 0.6;

    let distinct_behaviors: BTreeSet<&str> = successful
        .iter()
        .flat_map(|r| r.behaviors_executed.iter().map(String::as_str))
        .collect();
    let behavior_score = (distinct_behaviors.len() as f64 * 0.05).min(0.3);

    let avg_duration =
        successful.iter().map(|r| r.duration_secs).sum::<f64>() / successful.len() as f64;
    let duration_score = (avg_duration / 60.0).min(0.1);

    (base_score + behavior_score + duration_score).min(1.0)
}
