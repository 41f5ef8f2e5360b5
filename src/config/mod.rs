//! Configuration management for trendlens
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files. Every field has a default, so a config file only
//! needs the values it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;

/// Longest accepted activity window, in days
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analytics engine configuration
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Analytics engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Maximum number of topic trends reported
    pub max_topics: usize,

    /// Minimum number of items a keyword needs to be reported
    pub min_topic_count: usize,

    /// Number of most recent items reported
    pub recent_items: usize,

    /// Number of sources in each activity ranking
    pub active_sources_limit: usize,

    /// Trailing window for the weekly activity ranking, in days
    pub week_window_days: i64,

    /// Trailing window for the monthly activity ranking, in days
    pub month_window_days: i64,

    /// Keyword catalog override (display labels, in order)
    pub keywords: Option<Vec<String>>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_topics: 15,
            min_topic_count: 3,
            recent_items: 20,
            active_sources_limit: 5,
            week_window_days: 7,
            month_window_days: 30,
            keywords: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse::<T>().ok())
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// `TRENDLENS_KEYWORDS` is a comma-separated keyword list.
    pub fn from_env() -> Result<Self> {
        let defaults = AnalyticsConfig::default();

        let keywords = std::env::var("TRENDLENS_KEYWORDS").ok().map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        });

        let config = Self {
            analytics: AnalyticsConfig {
                max_topics: env_parse("TRENDLENS_MAX_TOPICS").unwrap_or(defaults.max_topics),
                min_topic_count: env_parse("TRENDLENS_MIN_TOPIC_COUNT")
                    .unwrap_or(defaults.min_topic_count),
                recent_items: env_parse("TRENDLENS_RECENT_ITEMS").unwrap_or(defaults.recent_items),
                active_sources_limit: env_parse("TRENDLENS_ACTIVE_SOURCES")
                    .unwrap_or(defaults.active_sources_limit),
                week_window_days: env_parse("TRENDLENS_WEEK_DAYS")
                    .unwrap_or(defaults.week_window_days),
                month_window_days: env_parse("TRENDLENS_MONTH_DAYS")
                    .unwrap_or(defaults.month_window_days),
                keywords,
            },
            logging: LoggingConfig {
                level: std::env::var("TRENDLENS_LOG_LEVEL")
                    .unwrap_or_else(|_| String::from("info")),
                format: std::env::var("TRENDLENS_LOG_FORMAT")
                    .unwrap_or_else(|_| String::from("text")),
            },
        };

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.analytics.validate()?;
        Ok(())
    }
}

impl AnalyticsConfig {
    /// Validate analytics settings
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.max_topics == 0 {
            return Err(Error::config("max_topics must be greater than 0"));
        }

        if self.recent_items == 0 {
            return Err(Error::config("recent_items must be greater than 0"));
        }

        if self.active_sources_limit == 0 {
            return Err(Error::config("active_sources_limit must be greater than 0"));
        }

        for (name, days) in [
            ("week_window_days", self.week_window_days),
            ("month_window_days", self.month_window_days),
        ] {
            if !(1..=MAX_WINDOW_DAYS).contains(&days) {
                return Err(Error::config(format!(
                    "{name} must be between 1 and {MAX_WINDOW_DAYS}, got {days}"
                )));
            }
        }

        if matches!(&self.keywords, Some(k) if k.is_empty()) {
            return Err(Error::config("keywords override must not be empty"));
        }

        Ok(())
    }
}
