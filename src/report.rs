//! Dashboard responses and trend digests
//!
//! [`AnalyticsResponse`] is the JSON envelope served to dashboards.
//! [`TrendDigest`] condenses an [`AnalyticsData`] into the handful of data
//! points a trend write-up needs, and [`DigestRenderer`] renders it as
//! Markdown through a Handlebars template.

use chrono::{DateTime, Utc};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;

use crate::analytics::{
    growth_rate, month_label, AnalyticsData, SourceBreakdown, TimelineEntry, TopicTrend,
};
use crate::error::Result;
use crate::models::format_timestamp;

/// Default digest template
const DEFAULT_TEMPLATE: &str = include_str!("../templates/digest.hbs");

/// Months compared on each side of the growth rate
pub const GROWTH_WINDOW_MONTHS: usize = 6;

const TOP_KEYWORDS: usize = 10;
const TOP_SOURCES: usize = 5;
const RECENT_TITLES: usize = 20;

/// JSON envelope for analytics results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalyticsData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub last_refresh: String,
}

impl AnalyticsResponse {
    /// Successful response
    pub fn ok(data: AnalyticsData, now: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            last_refresh: format_timestamp(now),
        }
    }

    /// Failed response carrying the error message
    pub fn failure(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            last_refresh: format_timestamp(now),
        }
    }
}

/// Condensed view of an analytics result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDigest {
    pub generated_at: String,
    pub total_articles: usize,
    pub total_papers: usize,
    pub total_social_posts: usize,

    /// Articles plus papers; social posts are already counted as articles
    pub total_items: usize,

    /// Percent change of mean monthly volume, recent vs previous window
    pub growth_rate: f64,

    pub top_keyword: Option<String>,
    pub earliest: String,
    pub latest: String,
    pub top_keywords: Vec<TopicTrend>,
    pub top_sources: Vec<SourceBreakdown>,
    pub recent_titles: Vec<String>,
    pub recent_months: Vec<TimelineEntry>,
}

impl TrendDigest {
    /// Build a digest from an analytics result
    pub fn from_analytics(data: &AnalyticsData, now: DateTime<Utc>) -> Self {
        let recent_start = data.timeline.len().saturating_sub(GROWTH_WINDOW_MONTHS);

        Self {
            generated_at: format_timestamp(now),
            total_articles: data.total_articles,
            total_papers: data.total_papers,
            total_social_posts: data.total_social_posts,
            total_items: data.total_articles + data.total_papers,
            growth_rate: growth_rate(&data.timeline, GROWTH_WINDOW_MONTHS),
            top_keyword: data.topic_trends.first().map(|t| t.keyword.clone()),
            earliest: data.date_range.earliest.clone(),
            latest: data.date_range.latest.clone(),
            top_keywords: data.topic_trends.iter().take(TOP_KEYWORDS).cloned().collect(),
            top_sources: data.source_breakdown.iter().take(TOP_SOURCES).cloned().collect(),
            recent_titles: data
                .recent_items
                .iter()
                .take(RECENT_TITLES)
                .map(|item| item.title.clone())
                .collect(),
            recent_months: data.timeline[recent_start..].to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ShareView {
    keyword: String,
    source: String,
    count: usize,
    percentage: String,
}

#[derive(Debug, Serialize)]
struct MonthView {
    label: &'static str,
    month: String,
    total: usize,
}

/// Template data for rendering
#[derive(Debug, Serialize)]
struct DigestTemplateData {
    generated_at: String,
    total_articles: usize,
    total_papers: usize,
    total_social_posts: usize,
    earliest: String,
    latest: String,
    growth_rate: String,
    window: usize,
    top_keywords: Vec<ShareView>,
    top_sources: Vec<ShareView>,
    recent_months: Vec<MonthView>,
    recent_titles: Vec<String>,
}

impl From<&TrendDigest> for DigestTemplateData {
    fn from(digest: &TrendDigest) -> Self {
        Self {
            generated_at: digest.generated_at.clone(),
            total_articles: digest.total_articles,
            total_papers: digest.total_papers,
            total_social_posts: digest.total_social_posts,
            earliest: digest.earliest.clone(),
            latest: digest.latest.clone(),
            growth_rate: format!("{:.1}%", digest.growth_rate),
            window: GROWTH_WINDOW_MONTHS,
            top_keywords: digest
                .top_keywords
                .iter()
                .map(|t| ShareView {
                    keyword: t.keyword.clone(),
                    source: String::new(),
                    count: t.count,
                    percentage: format!("{:.1}%", t.percentage),
                })
                .collect(),
            top_sources: digest
                .top_sources
                .iter()
                .map(|s| ShareView {
                    keyword: String::new(),
                    source: s.source.clone(),
                    count: s.count,
                    percentage: format!("{:.1}%", s.percentage),
                })
                .collect(),
            recent_months: digest
                .recent_months
                .iter()
                .map(|m| MonthView {
                    label: month_label(&m.month).unwrap_or(""),
                    month: m.month.clone(),
                    total: m.total,
                })
                .collect(),
            recent_titles: digest.recent_titles.clone(),
        }
    }
}

/// Markdown renderer for trend digests
pub struct DigestRenderer {
    handlebars: Handlebars<'static>,
}

impl DigestRenderer {
    /// Create a renderer with the built-in template
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string("digest", DEFAULT_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Create a renderer with a custom template file
    pub fn with_template(template_path: &Path) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_file("digest", template_path)?;
        tracing::debug!(path = %template_path.display(), "Registered custom digest template");
        Ok(Self { handlebars })
    }

    /// Render a digest to Markdown
    pub fn render(&self, digest: &TrendDigest) -> Result<String> {
        let data = DigestTemplateData::from(digest);
        Ok(self.handlebars.render("digest", &data)?)
    }
}
