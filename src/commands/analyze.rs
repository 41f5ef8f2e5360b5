use anyhow::{Context, Result};
use std::path::PathBuf;

use trendlens::analytics::{filter_year, AnalyticsEngine};
use trendlens::config::Config;
use trendlens::report::AnalyticsResponse;

use super::{load_corpus, reference_time};

/// Arguments of the analyze command
pub struct AnalyzeParams {
    pub input: PathBuf,
    pub now: Option<String>,
    pub year: Option<i32>,
    pub output: Option<PathBuf>,
    pub compact: bool,
}

pub async fn analyze(config: &Config, params: AnalyzeParams) -> Result<()> {
    let now = reference_time(params.now.as_deref())?;
    let corpus = load_corpus(&params.input, now).await?;

    let engine = AnalyticsEngine::new(config.analytics.clone())?;

    let response = match engine.analyze(&corpus.articles, &corpus.papers, now) {
        Ok(mut data) => {
            if let Some(year) = params.year {
                data.timeline = filter_year(&data.timeline, year);
            }
            tracing::info!(
                topics = data.topic_trends.len(),
                sources = data.source_breakdown.len(),
                months = data.timeline.len(),
                "Analytics computed"
            );
            AnalyticsResponse::ok(data, now)
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                category = e.category().description(),
                "Analytics failed"
            );
            AnalyticsResponse::failure(e.to_string(), now)
        }
    };

    let json = if params.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };

    match params.output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote analytics");
        }
        None => println!("{json}"),
    }

    if !response.success {
        anyhow::bail!("analysis failed: {}", response.error.unwrap_or_default());
    }

    Ok(())
}
