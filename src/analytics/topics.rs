//! Topic trend aggregation over keyword presence

use serde::{Deserialize, Serialize};

use super::keywords::KeywordCatalog;
use crate::models::ContentItem;

/// Keyword with the number of items mentioning it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTrend {
    pub keyword: String,

    /// Items whose title or content mention the keyword
    pub count: usize,

    /// `count / total items * 100`
    pub percentage: f64,
}

/// Rank catalog keywords by how many items mention them
///
/// Keywords seen in fewer than `min_count` items are dropped, the rest are
/// sorted by count descending (catalog order among equal counts) and cut to
/// `limit`. Percentages are relative to all items, not only matching ones.
pub fn compute_topic_trends(
    catalog: &KeywordCatalog,
    items: &[ContentItem],
    min_count: usize,
    limit: usize,
) -> Vec<TopicTrend> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut counts = vec![0usize; catalog.len()];
    for item in items {
        for idx in catalog.match_indices(&item.search_text()) {
            counts[idx] += 1;
        }
    }

    let total = items.len() as f64;
    let mut trends: Vec<TopicTrend> = catalog
        .entries()
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0 && *count >= min_count)
        .map(|(entry, count)| TopicTrend {
            keyword: entry.label().to_string(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect();

    // Stable sort keeps catalog order for ties
    trends.sort_by(|a, b| b.count.cmp(&a.count));
    trends.truncate(limit);
    trends
}
