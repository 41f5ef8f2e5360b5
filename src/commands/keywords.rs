use anyhow::Result;

use trendlens::analytics::AnalyticsEngine;
use trendlens::config::Config;

pub fn keywords(config: &Config, text: &str) -> Result<()> {
    let engine = AnalyticsEngine::new(config.analytics.clone())?;
    let found = engine.catalog().extract(text);

    tracing::debug!(matched = found.len(), catalog = engine.catalog().len(), "Scanned text");

    if found.is_empty() {
        println!("No catalog keywords found");
    } else {
        for keyword in found {
            println!("{keyword}");
        }
    }

    Ok(())
}
