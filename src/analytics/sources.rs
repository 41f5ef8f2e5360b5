//! Source family breakdown and trailing-window activity rankings
//!
//! Per-feed labels such as `"Reddit - r/MachineLearning"` are collapsed to
//! their family (`"Reddit"`) for the breakdown, while the activity rankings
//! keep the raw label so individual feeds stay distinguishable.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{format_timestamp, ContentItem};

/// Family label for Hacker News items (the raw label is already the family)
pub const HACKER_NEWS: &str = "Hacker News";

/// Raw label prefixes collapsed into a family
const FAMILY_PREFIXES: &[(&str, &str)] = &[
    ("News API -", "News API"),
    ("Semantic Scholar -", "Semantic Scholar"),
    ("ArXiv -", "ArXiv"),
    ("Reddit -", "Reddit"),
];

/// Collapse a raw source label into its family label
///
/// Unrecognized sources pass through unchanged.
pub fn source_family(raw: &str) -> &str {
    FAMILY_PREFIXES
        .iter()
        .find(|(prefix, _)| raw.starts_with(prefix))
        .map_or(raw, |(_, family)| *family)
}

/// Whether the raw source is a social feed (Reddit or Hacker News)
pub fn is_social_source(raw: &str) -> bool {
    raw.starts_with("Reddit -") || raw == HACKER_NEWS
}

/// Item count for one source family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub source: String,
    pub count: usize,
    pub percentage: f64,
}

/// Recent activity for one raw source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSource {
    pub source: String,
    pub count: usize,

    /// Most recent publication time seen for this source
    pub last_published: String,
}

/// Count items per source family
///
/// Every family is reported, sorted by count descending and then by label.
pub fn compute_source_breakdown(items: &[ContentItem]) -> Vec<SourceBreakdown> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(source_family(&item.source)).or_insert(0) += 1;
    }

    let total = items.len() as f64;
    let mut breakdown: Vec<SourceBreakdown> = counts
        .into_iter()
        .map(|(source, count)| SourceBreakdown {
            source: source.to_string(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect();

    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}

/// Start of a trailing window of `window_days` ending at `now`
pub fn window_cutoff(now: DateTime<Utc>, window_days: i64) -> DateTime<Utc> {
    TimeDelta::try_days(window_days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Rank raw sources by items published within `window_days` before `now`
///
/// The window is inclusive of its start (`published >= now - window_days`).
/// A window reaching past the representable date range covers everything.
/// Ties on count are ordered by label.
pub fn compute_active_sources(
    items: &[ContentItem],
    now: DateTime<Utc>,
    window_days: i64,
    limit: usize,
) -> Vec<ActiveSource> {
    let cutoff = window_cutoff(now, window_days);

    let mut activity: BTreeMap<&str, (usize, DateTime<Utc>)> = BTreeMap::new();
    for item in items.iter().filter(|item| item.published >= cutoff) {
        activity
            .entry(item.source.as_str())
            .and_modify(|(count, last)| {
                *count += 1;
                if item.published > *last {
                    *last = item.published;
                }
            })
            .or_insert((1, item.published));
    }

    let mut ranked: Vec<ActiveSource> = activity
        .into_iter()
        .map(|(source, (count, last))| ActiveSource {
            source: source.to_string(),
            count,
            last_published: format_timestamp(last),
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}
