//! Analytics over aggregated articles and papers
//!
//! - [`keywords`] - keyword catalog and whole-phrase extraction
//! - [`topics`] - topic trends by item-level keyword presence
//! - [`sources`] - source family breakdown and activity rankings
//! - [`timeline`] - monthly buckets and date range
//! - [`engine`] - orchestration into [`AnalyticsData`]

pub mod engine;
pub mod keywords;
pub mod sources;
pub mod timeline;
pub mod topics;

pub use engine::{analyze_data, AnalyticsData, AnalyticsEngine, DateRange};
pub use keywords::{normalize_phrase, KeywordCatalog, KeywordEntry, DEFAULT_KEYWORDS};
pub use sources::{is_social_source, source_family, ActiveSource, SourceBreakdown};
pub use timeline::{filter_year, growth_rate, month_label, TimelineEntry};
pub use topics::TopicTrend;
