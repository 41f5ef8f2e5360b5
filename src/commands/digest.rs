use anyhow::{Context, Result};
use std::path::PathBuf;

use trendlens::analytics::AnalyticsEngine;
use trendlens::config::Config;
use trendlens::report::{DigestRenderer, TrendDigest};

use super::{load_corpus, reference_time};

pub async fn digest(
    config: &Config,
    input: PathBuf,
    now: Option<String>,
    template: Option<PathBuf>,
) -> Result<()> {
    let now = reference_time(now.as_deref())?;
    let corpus = load_corpus(&input, now).await?;

    let engine = AnalyticsEngine::new(config.analytics.clone())?;
    let data = engine
        .analyze(&corpus.articles, &corpus.papers, now)
        .context("Analytics failed")?;

    let digest = TrendDigest::from_analytics(&data, now);
    tracing::debug!(
        growth_rate = digest.growth_rate,
        top_keyword = ?digest.top_keyword,
        "Digest data points"
    );

    let renderer = match &template {
        Some(path) => DigestRenderer::with_template(path)?,
        None => DigestRenderer::new()?,
    };

    println!("{}", renderer.render(&digest)?);
    Ok(())
}
