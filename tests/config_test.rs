//! Tests for config module

use serial_test::serial;
use std::io::Write;
use trendlens::analytics::AnalyticsEngine;
use trendlens::config::Config;
use trendlens::error::ErrorCategory;

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[analytics]
max_topics = 5
min_topic_count = 1
week_window_days = 3
keywords = ["GPT", "Fine-tuning"]

[logging]
level = "debug"
format = "json"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.analytics.max_topics, 5);
    assert_eq!(config.analytics.week_window_days, 3);
    assert_eq!(config.analytics.month_window_days, 30);
    assert_eq!(config.logging.format, "json");

    let engine = AnalyticsEngine::new(config.analytics).unwrap();
    assert_eq!(engine.catalog().len(), 2);
}

#[test]
fn test_config_file_missing() {
    let result = Config::from_file(std::path::Path::new("/nonexistent/trendlens.toml"));
    assert!(result.is_err());
}

#[test]
fn test_invalid_keyword_in_config() {
    let config: Config = toml::from_str("[analytics]\nkeywords = [\"--\"]").unwrap();
    assert!(config.validate().is_ok());
    assert!(AnalyticsEngine::new(config.analytics).is_err());
}

#[test]
#[serial]
fn test_config_from_env() {
    std::env::set_var("TRENDLENS_MAX_TOPICS", "7");
    std::env::set_var("TRENDLENS_KEYWORDS", "GPT, Claude ,,Gemini");
    let config = Config::from_env().unwrap();
    std::env::remove_var("TRENDLENS_MAX_TOPICS");
    std::env::remove_var("TRENDLENS_KEYWORDS");

    assert_eq!(config.analytics.max_topics, 7);
    assert_eq!(
        config.analytics.keywords,
        Some(vec![
            "GPT".to_string(),
            "Claude".to_string(),
            "Gemini".to_string()
        ])
    );
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    std::env::remove_var("TRENDLENS_MAX_TOPICS");
    std::env::set_var("TRENDLENS_RECENT_ITEMS", "not a number");
    let config = Config::from_env().unwrap();
    std::env::remove_var("TRENDLENS_RECENT_ITEMS");

    assert_eq!(config.analytics.max_topics, 15);
    assert_eq!(config.analytics.recent_items, 20);
}

#[test]
fn test_oversized_window_rejected() {
    let config: Config =
        toml::from_str("[analytics]\nmonth_window_days = 200000000000000").unwrap();
    assert!(config.validate().is_err());

    let err = AnalyticsEngine::new(config.analytics).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Config);
}
