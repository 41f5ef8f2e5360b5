//! Unified error handling for the trendlens crate
//!
//! The analytics engine is a total function over well-formed input, so the
//! error surface is small: malformed dates, keyword phrases and limits coming
//! in from callers, plus the JSON and template failures of the surrounding
//! ingest/report layers. File access stays in the binary, behind `anyhow`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trendlens::error::{Error, ErrorCategory};
//!
//! fn handle_error(err: Error) {
//!     if err.category() == ErrorCategory::Input {
//!         eprintln!("Rejected input: {err}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller-supplied data that cannot be analyzed
    Input,
    /// Configuration and validation errors
    Config,
    /// JSON decoding errors
    Parsing,
    /// Template registration and rendering errors
    Rendering,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Short human-readable description of the category
    pub fn description(&self) -> &'static str {
        match self {
            Self::Input => "invalid input",
            Self::Config => "configuration error",
            Self::Parsing => "parse error",
            Self::Rendering => "rendering error",
            Self::Other => "other error",
        }
    }
}

/// Unified error type for the trendlens crate
#[derive(Error, Debug)]
pub enum Error {
    /// An item's publication date could not be parsed
    #[error("Invalid publication date {value:?} for item {link:?}")]
    InvalidDate { link: String, value: String },

    /// A keyword phrase normalizes to nothing matchable
    #[error("Invalid keyword phrase: {0:?}")]
    InvalidKeyword(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template registration errors
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Template rendering errors
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the error category for handling strategies
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDate { .. } | Self::InvalidKeyword(_) => ErrorCategory::Input,
            Self::Config(_) => ErrorCategory::Config,
            Self::Json(_) => ErrorCategory::Parsing,
            Self::Template(_) | Self::Render(_) => ErrorCategory::Rendering,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(err))
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
