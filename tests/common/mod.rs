//! Common test utilities

use chrono::{DateTime, Duration, TimeZone, Utc};
use trendlens::models::{format_timestamp, Article, Paper};

/// Fixed reference time used as "now"
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
}

/// Create an article with the given text, source and publication time
#[allow(dead_code)]
pub fn article(title: &str, content: &str, source: &str, published: DateTime<Utc>) -> Article {
    Article {
        title: title.to_string(),
        link: format!("https://news.example.com/{}", title.replace(' ', "-")),
        pub_date: format_timestamp(published),
        content: content.to_string(),
        source: source.to_string(),
        categories: vec!["AI".to_string()],
    }
}

/// Create a paper with the given text, source and publication time
#[allow(dead_code)]
pub fn paper(title: &str, content: &str, source: &str, published: DateTime<Utc>) -> Paper {
    Paper {
        title: title.to_string(),
        link: format!("https://arxiv.org/abs/{}", title.replace(' ', "-")),
        pub_date: format_timestamp(published),
        content: content.to_string(),
        source: source.to_string(),
        categories: vec!["cs.AI".to_string()],
        authors: vec!["A. Researcher".to_string()],
    }
}

/// Time `days` before the reference time
#[allow(dead_code)]
pub fn days_ago(days: i64) -> DateTime<Utc> {
    reference_now() - Duration::days(days)
}
