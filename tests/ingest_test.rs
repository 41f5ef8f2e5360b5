//! Tests for loading stored documents into the analytics engine

mod common;

use std::io::Write;
use trendlens::analytics::AnalyticsEngine;
use trendlens::ingest::{parse_corpus, DEFAULT_SOURCE, DEFAULT_TITLE};

const DOCUMENT_DUMP: &str = r#"[
    {
        "id": "a1",
        "metadata": {
            "title": "OpenAI ships a new GPT",
            "link": "https://techcrunch.com/gpt",
            "pubDate": "Thu, 13 Mar 2025 08:00:00 GMT",
            "content": "The GPT release focuses on agents",
            "source": "TechCrunch AI",
            "type": "article"
        }
    },
    {
        "id": "p1",
        "metadata": {
            "title": "Scaling GPT reasoning",
            "link": "https://arxiv.org/abs/2503.00001",
            "pubDate": "2025-03-10T00:00:00Z",
            "content": "We study GPT",
            "source": "ArXiv - Computation and Language",
            "authors": ["A. Researcher", "B. Scientist"],
            "type": "paper"
        }
    },
    {
        "id": "r1",
        "metadata": {
            "content": "GPT discussion thread",
            "source": "Reddit - r/MachineLearning"
        }
    },
    { "id": "empty" }
]"#;

#[test]
fn test_document_dump_end_to_end() {
    let now = common::reference_now();
    let corpus = parse_corpus(DOCUMENT_DUMP, now).unwrap();

    assert_eq!(corpus.articles.len(), 2);
    assert_eq!(corpus.papers.len(), 1);
    assert_eq!(corpus.papers[0].authors.len(), 2);

    let defaulted = &corpus.articles[1];
    assert_eq!(defaulted.title, DEFAULT_TITLE);
    assert_eq!(defaulted.pub_date, "2025-03-15T12:00:00.000Z");
    assert!(defaulted.link.is_empty());

    let data = AnalyticsEngine::default()
        .analyze(&corpus.articles, &corpus.papers, now)
        .unwrap();
    assert_eq!(data.total_articles, 2);
    assert_eq!(data.total_papers, 1);
    assert_eq!(data.total_social_posts, 1);
    assert_eq!(data.topic_trends[0].keyword, "GPT");
    assert_eq!(data.topic_trends[0].count, 3);
    assert_eq!(data.most_active_sources_week.len(), 3);
    assert_eq!(data.recent_items[0].title, DEFAULT_TITLE);
}

#[test]
fn test_missing_source_defaults_to_unknown() {
    let json = r#"[{"id":"x","metadata":{"title":"t","pubDate":"2025-03-01"}}]"#;
    let corpus = parse_corpus(json, common::reference_now()).unwrap();
    assert_eq!(corpus.articles[0].source, DEFAULT_SOURCE);

    let data = AnalyticsEngine::default()
        .analyze(&corpus.articles, &[], common::reference_now())
        .unwrap();
    assert_eq!(data.source_breakdown[0].source, "Unknown");
}

#[test]
fn test_corpus_file_rejects_missing_fields() {
    // Corpus objects are validated strictly; the article has no source
    let json = r#"{"articles":[{"title":"t","link":"l","pubDate":"2025-03-01","content":""}]}"#;
    assert!(parse_corpus(json, common::reference_now()).is_err());
}

#[test]
fn test_corpus_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"papers":[{{"title":"t","link":"l","pubDate":"2025-03-01","content":"","source":"ArXiv - AI"}}]}}"#
    )
    .unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let corpus = parse_corpus(&content, common::reference_now()).unwrap();
    assert_eq!(corpus.papers.len(), 1);
    assert!(corpus.papers[0].authors.is_empty());
}
