//! Analytics orchestration
//!
//! [`AnalyticsEngine::analyze`] turns the article and paper collections into
//! one [`AnalyticsData`] value. It is synchronous, keeps no state between
//! calls, and takes the reference time explicitly so the trailing-window
//! rankings are reproducible.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::keywords::KeywordCatalog;
use super::sources::{
    compute_active_sources, compute_source_breakdown, is_social_source, ActiveSource,
    SourceBreakdown,
};
use super::timeline::{compute_timeline, TimelineEntry};
use super::topics::{compute_topic_trends, TopicTrend};
use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::models::{format_timestamp, Article, ContentItem, Paper};

/// Publication date range of the analyzed items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub earliest: String,
    pub latest: String,
}

/// Aggregated dashboard data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub total_articles: usize,
    pub total_papers: usize,

    /// Items from Reddit or Hacker News
    pub total_social_posts: usize,

    pub topic_trends: Vec<TopicTrend>,
    pub source_breakdown: Vec<SourceBreakdown>,

    /// Most recent items, newest first
    pub recent_items: Vec<ContentItem>,

    /// Monthly buckets, oldest first
    pub timeline: Vec<TimelineEntry>,

    pub date_range: DateRange,
    pub most_active_sources_week: Vec<ActiveSource>,
    pub most_active_sources_month: Vec<ActiveSource>,
}

/// Analytics engine with its keyword catalog and limits
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    catalog: KeywordCatalog,
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    /// Build an engine from configuration
    ///
    /// Validates the limits, then uses the configured keyword override or
    /// the default catalog.
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        config.validate()?;
        let catalog = match &config.keywords {
            Some(keywords) => KeywordCatalog::new(keywords)?,
            None => KeywordCatalog::default(),
        };
        Ok(Self { catalog, config })
    }

    /// Build an engine with an explicit catalog
    pub fn with_catalog(catalog: KeywordCatalog, config: AnalyticsConfig) -> Self {
        Self { catalog, config }
    }

    /// Keyword catalog in use
    pub fn catalog(&self) -> &KeywordCatalog {
        &self.catalog
    }

    /// Engine limits in use
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Aggregate articles and papers as of `now`
    ///
    /// Fails only when an item's publication date cannot be parsed.
    pub fn analyze(
        &self,
        articles: &[Article],
        papers: &[Paper],
        now: DateTime<Utc>,
    ) -> Result<AnalyticsData> {
        let mut items = Vec::with_capacity(articles.len() + papers.len());
        for article in articles {
            items.push(ContentItem::from_article(article)?);
        }
        for paper in papers {
            items.push(ContentItem::from_paper(paper)?);
        }

        let total_social_posts = items
            .iter()
            .filter(|item| is_social_source(&item.source))
            .count();

        let topic_trends = compute_topic_trends(
            &self.catalog,
            &items,
            self.config.min_topic_count,
            self.config.max_topics,
        );
        let source_breakdown = compute_source_breakdown(&items);

        let (timeline, bounds) = compute_timeline(&items);
        let date_range = match bounds {
            Some(b) => DateRange {
                earliest: format_timestamp(b.earliest),
                latest: format_timestamp(b.latest),
            },
            None => DateRange {
                earliest: format_timestamp(now),
                latest: format_timestamp(now),
            },
        };

        let most_active_sources_week = compute_active_sources(
            &items,
            now,
            self.config.week_window_days,
            self.config.active_sources_limit,
        );
        let most_active_sources_month = compute_active_sources(
            &items,
            now,
            self.config.month_window_days,
            self.config.active_sources_limit,
        );

        // Stable sort: equal timestamps keep input order
        let mut recent_items = items;
        recent_items.sort_by(|a, b| b.published.cmp(&a.published));
        recent_items.truncate(self.config.recent_items);

        Ok(AnalyticsData {
            total_articles: articles.len(),
            total_papers: papers.len(),
            total_social_posts,
            topic_trends,
            source_breakdown,
            recent_items,
            timeline,
            date_range,
            most_active_sources_week,
            most_active_sources_month,
        })
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::with_catalog(KeywordCatalog::default(), AnalyticsConfig::default())
    }
}

/// Aggregate with the default catalog and limits, as of the current time
pub fn analyze_data(articles: &[Article], papers: &[Paper]) -> Result<AnalyticsData> {
    AnalyticsEngine::default().analyze(articles, papers, Utc::now())
}
