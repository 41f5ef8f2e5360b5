mod analyze;
mod digest;
mod keywords;

pub use analyze::{analyze, AnalyzeParams};
pub use digest::digest;
pub use keywords::keywords;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use trendlens::ingest::{parse_corpus, Corpus};

/// Resolve the reference time from an optional RFC 3339 argument
fn reference_time(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(value) => Ok(DateTime::parse_from_rfc3339(value)
            .with_context(|| format!("Invalid --now value: {value}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// Read and parse an input file
async fn load_corpus(path: &Path, now: DateTime<Utc>) -> Result<Corpus> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let corpus = parse_corpus(&content, now)
        .with_context(|| format!("Failed to parse input file: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        articles = corpus.articles.len(),
        papers = corpus.papers.len(),
        "Loaded corpus"
    );

    Ok(corpus)
}
