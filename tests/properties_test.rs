//! Property tests for aggregation invariants

mod common;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use trendlens::analytics::AnalyticsEngine;
use trendlens::models::{format_timestamp, Article, Paper};

const SOURCES: &[&str] = &[
    "TechCrunch AI",
    "VentureBeat AI",
    "Hacker News",
    "Reddit - r/MachineLearning",
    "Reddit - r/artificial",
    "ArXiv - AI",
    "ArXiv - Computer Vision",
    "Semantic Scholar - NLP",
    "News API - Wired",
];

const WORDS: &[&str] = &[
    "GPT",
    "large language model",
    "diffusion",
    "transformer",
    "agents",
    "robotics",
    "fine-tuning",
    "RAG",
    "benchmark",
    "open source",
    "claude",
    "gemini",
    "the",
    "results",
];

#[derive(Debug, Clone)]
struct RawItem {
    source: usize,
    words: Vec<usize>,
    offset_hours: i64,
}

fn raw_item() -> impl Strategy<Value = RawItem> {
    (
        0..SOURCES.len(),
        prop::collection::vec(0..WORDS.len(), 0..6),
        0i64..(24 * 400),
    )
        .prop_map(|(source, words, offset_hours)| RawItem {
            source,
            words,
            offset_hours,
        })
}

fn build(raw: &RawItem, idx: usize) -> (String, String, String, String) {
    let now = common::reference_now();
    let published = now - Duration::hours(raw.offset_hours);
    let content = raw
        .words
        .iter()
        .map(|w| WORDS[*w])
        .collect::<Vec<_>>()
        .join(" ");
    (
        format!("item {idx}"),
        content,
        SOURCES[raw.source].to_string(),
        format_timestamp(published),
    )
}

fn corpus(raw_articles: &[RawItem], raw_papers: &[RawItem]) -> (Vec<Article>, Vec<Paper>) {
    let articles = raw_articles
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let (title, content, source, pub_date) = build(raw, idx);
            Article {
                link: format!("https://example.com/{idx}"),
                title,
                content,
                source,
                pub_date,
                categories: vec![],
            }
        })
        .collect();
    let papers = raw_papers
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let (title, content, source, pub_date) = build(raw, idx);
            Paper {
                link: format!("https://arxiv.org/abs/{idx}"),
                title,
                content,
                source,
                pub_date,
                categories: vec![],
                authors: vec![],
            }
        })
        .collect();
    (articles, papers)
}

proptest! {
    #[test]
    fn breakdown_conserves_counts_and_percentages(
        raw_articles in prop::collection::vec(raw_item(), 0..40),
        raw_papers in prop::collection::vec(raw_item(), 0..40),
    ) {
        let (articles, papers) = corpus(&raw_articles, &raw_papers);
        let data = AnalyticsEngine::default()
            .analyze(&articles, &papers, common::reference_now())
            .unwrap();
        let total = articles.len() + papers.len();

        let count: usize = data.source_breakdown.iter().map(|s| s.count).sum();
        prop_assert_eq!(count, total);

        if total > 0 {
            let pct: f64 = data.source_breakdown.iter().map(|s| s.percentage).sum();
            prop_assert!((pct - 100.0).abs() < 1e-6);
        }

        prop_assert!(data
            .source_breakdown
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn topic_trends_respect_floor_and_cap(
        raw_articles in prop::collection::vec(raw_item(), 0..60),
    ) {
        let (articles, _) = corpus(&raw_articles, &[]);
        let data = AnalyticsEngine::default()
            .analyze(&articles, &[], common::reference_now())
            .unwrap();

        prop_assert!(data.topic_trends.len() <= 15);
        prop_assert!(data.topic_trends.iter().all(|t| t.count >= 3));
        prop_assert!(data.topic_trends.iter().all(|t| t.count <= articles.len()));
        prop_assert!(data
            .topic_trends
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn timeline_conserves_and_orders(
        raw_articles in prop::collection::vec(raw_item(), 0..40),
        raw_papers in prop::collection::vec(raw_item(), 0..40),
    ) {
        let (articles, papers) = corpus(&raw_articles, &raw_papers);
        let data = AnalyticsEngine::default()
            .analyze(&articles, &papers, common::reference_now())
            .unwrap();

        let total: usize = data.timeline.iter().map(|t| t.total).sum();
        prop_assert_eq!(total, articles.len() + papers.len());
        prop_assert_eq!(
            data.timeline.iter().map(|t| t.articles).sum::<usize>(),
            articles.len()
        );
        prop_assert!(data.timeline.windows(2).all(|w| w[0].month < w[1].month));
        prop_assert!(data
            .recent_items
            .windows(2)
            .all(|w| w[0].published >= w[1].published));
        prop_assert!(data.recent_items.len() <= 20);
    }

    #[test]
    fn activity_rankings_stay_inside_windows(
        raw_articles in prop::collection::vec(raw_item(), 0..40),
    ) {
        let (articles, _) = corpus(&raw_articles, &[]);
        let now = common::reference_now();
        let data = AnalyticsEngine::default()
            .analyze(&articles, &[], now)
            .unwrap();

        let in_week = raw_articles.iter().filter(|r| r.offset_hours <= 7 * 24).count();
        let week_count: usize = data.most_active_sources_week.iter().map(|s| s.count).sum();
        prop_assert!(week_count <= in_week);
        prop_assert!(data.most_active_sources_week.len() <= 5);
        prop_assert!(data.most_active_sources_month.len() <= 5);

        let cutoff = format_timestamp(now - Duration::days(30));
        prop_assert!(data
            .most_active_sources_month
            .iter()
            .all(|s| s.last_published >= cutoff));
    }
}

#[test]
fn test_reference_time_is_fixed() {
    assert_eq!(
        common::reference_now(),
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    );
}
