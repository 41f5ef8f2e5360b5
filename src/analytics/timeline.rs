//! Monthly timeline bucketing
//!
//! Buckets are keyed by the UTC calendar month as `"YYYY-MM"`. The key is
//! fixed-width, so lexicographic order is chronological order. Restricting
//! the timeline to a single year is a display concern handled by
//! [`filter_year`] after aggregation.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ContentItem, ItemKind};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Item counts for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Bucket key, `"YYYY-MM"`
    pub month: String,
    pub articles: usize,
    pub papers: usize,
    pub total: usize,
}

/// Earliest and latest publication times of a set of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
}

/// Bucket key for a timestamp
pub fn month_key(ts: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", ts.year(), ts.month())
}

/// Bucket items by month and track the overall date bounds in the same pass
///
/// Returns `None` bounds when there are no items.
pub fn compute_timeline(items: &[ContentItem]) -> (Vec<TimelineEntry>, Option<Bounds>) {
    let mut buckets: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    let mut bounds: Option<Bounds> = None;

    for item in items {
        let ts = item.published;
        bounds = Some(match bounds {
            None => Bounds {
                earliest: ts,
                latest: ts,
            },
            Some(b) => Bounds {
                earliest: b.earliest.min(ts),
                latest: b.latest.max(ts),
            },
        });

        let counts = buckets.entry(month_key(ts)).or_insert((0, 0));
        match item.kind {
            ItemKind::Article => counts.0 += 1,
            ItemKind::Paper => counts.1 += 1,
        }
    }

    let timeline = buckets
        .into_iter()
        .map(|(month, (articles, papers))| TimelineEntry {
            month,
            articles,
            papers,
            total: articles + papers,
        })
        .collect();

    (timeline, bounds)
}

/// Keep only the buckets of one calendar year
pub fn filter_year(timeline: &[TimelineEntry], year: i32) -> Vec<TimelineEntry> {
    let prefix = format!("{year:04}-");
    timeline
        .iter()
        .filter(|entry| entry.month.starts_with(&prefix))
        .cloned()
        .collect()
}

/// Short English month name for a `"YYYY-MM"` key
pub fn month_label(key: &str) -> Option<&'static str> {
    let (_, month) = key.rsplit_once('-')?;
    let month: usize = month.parse().ok()?;
    MONTH_LABELS.get(month.checked_sub(1)?).copied()
}

/// Percent change of the mean monthly total over the last `window` buckets
/// compared with the `window` buckets before them
///
/// Returns 0 when there is no earlier data to compare against.
pub fn growth_rate(timeline: &[TimelineEntry], window: usize) -> f64 {
    if window == 0 {
        return 0.0;
    }

    let recent_start = timeline.len().saturating_sub(window);
    let earlier_start = recent_start.saturating_sub(window);

    let mean = |entries: &[TimelineEntry]| {
        if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.total as f64).sum::<f64>() / entries.len() as f64
        }
    };

    let recent = mean(&timeline[recent_start..]);
    let earlier = mean(&timeline[earlier_start..recent_start]);

    if earlier > 0.0 {
        (recent - earlier) / earlier * 100.0
    } else {
        0.0
    }
}
