//! trendlens - AI news and research analytics
//!
//! Aggregates articles, papers and social posts collected from AI news
//! feeds into dashboard analytics: topic trends, source breakdowns, a
//! monthly timeline and trailing-window source activity.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`] - Article, paper and normalized item types
//! - [`analytics`] - The aggregation engine
//! - [`ingest`] - Stored documents to articles and papers, with defaults
//! - [`report`] - Response envelope and Markdown trend digests
//! - [`config`] - Configuration management and settings
//! - [`error`] - Crate error type
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use trendlens::analytics::AnalyticsEngine;
//! use trendlens::config::Config;
//! use trendlens::models::Article;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let engine = AnalyticsEngine::new(config.analytics)?;
//!     let articles: Vec<Article> = Vec::new();
//!     let data = engine.analyze(&articles, &[], Utc::now())?;
//!     println!("{}", serde_json::to_string_pretty(&data)?);
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{analyze_data, AnalyticsData, AnalyticsEngine, KeywordCatalog};
    pub use crate::config::{AnalyticsConfig, Config};
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::ingest::{parse_corpus, Corpus, StoredDocument};
    pub use crate::models::{Article, ContentItem, ItemKind, Paper};
    pub use crate::report::{AnalyticsResponse, DigestRenderer, TrendDigest};
}

// Direct re-exports for convenience
pub use analytics::{analyze_data, AnalyticsData, AnalyticsEngine};
pub use models::{Article, ContentItem, ItemKind, Paper};
