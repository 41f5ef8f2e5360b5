// Core data structures for trendlens

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// News article, blog post or social post as delivered by a fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub link: String,
    pub pub_date: String, // ISO-8601 or RFC-822
    pub content: String,
    pub source: String, // e.g. "TechCrunch AI", "Reddit - r/MachineLearning"
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Research paper as delivered by a fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub content: String, // abstract
    pub source: String,  // e.g. "ArXiv - AI"
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

/// Item kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Article,
    Paper,
}

impl ItemKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Paper => "paper",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Article or paper normalized for aggregation
///
/// Serializes with the raw `pubDate` string as received plus a `type` tag;
/// the parsed timestamp is kept for sorting and bucketing only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub content: String,
    pub source: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(skip)]
    pub published: DateTime<Utc>,
}

impl ContentItem {
    /// Normalize an article, parsing its publication date
    pub fn from_article(article: &Article) -> Result<Self> {
        Ok(Self {
            title: article.title.clone(),
            link: article.link.clone(),
            pub_date: article.pub_date.clone(),
            content: article.content.clone(),
            source: article.source.clone(),
            categories: article.categories.clone(),
            authors: None,
            kind: ItemKind::Article,
            published: parse_item_date(&article.link, &article.pub_date)?,
        })
    }

    /// Normalize a paper, parsing its publication date
    pub fn from_paper(paper: &Paper) -> Result<Self> {
        Ok(Self {
            title: paper.title.clone(),
            link: paper.link.clone(),
            pub_date: paper.pub_date.clone(),
            content: paper.content.clone(),
            source: paper.source.clone(),
            categories: paper.categories.clone(),
            authors: Some(paper.authors.clone()),
            kind: ItemKind::Paper,
            published: parse_item_date(&paper.link, &paper.pub_date)?,
        })
    }

    /// Text searched for keywords: title and content
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

fn parse_item_date(link: &str, value: &str) -> Result<DateTime<Utc>> {
    parse_pub_date(value).ok_or_else(|| Error::InvalidDate {
        link: link.to_string(),
        value: value.to_string(),
    })
}

/// Parse a feed publication date
///
/// Accepts RFC 3339 / ISO-8601 (with or without offset and fractional
/// seconds, or date only) and RFC 822/2822. Times without an offset are UTC.
pub fn parse_pub_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a timestamp the way dashboards expect: RFC 3339, UTC, milliseconds
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
