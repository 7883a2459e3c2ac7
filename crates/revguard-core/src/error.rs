//! Error types for revguard

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for revguard
#[derive(Debug, Error)]
pub enum ReviewGuardError {
    /// Rating below zero (or not a number)
    #[error("Rating is invalid: {rating}")]
    InvalidRating { rating: f64 },

    /// Comment contains a blacklisted term.
    ///
    /// The matched term is deliberately not carried.
    #[error("Comment contains forbidden language")]
    ProfanityDetected,

    /// Blacklist resource missing or unreadable
    #[error("Blacklist unavailable at {path}: {source}")]
    BlacklistUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Review store failed while executing a query
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Range whose start lies after its end
    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: f64, end: f64 },

    /// Review not found
    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ReviewGuardError>,
    },
}

impl ReviewGuardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ReviewGuardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error is a rejection of the submitted review itself,
    /// as opposed to an infrastructure failure.
    pub fn is_rejection(&self) -> bool {
        match self {
            ReviewGuardError::InvalidRating { .. } | ReviewGuardError::ProfanityDetected => true,
            ReviewGuardError::WithContext { source, .. } => source.is_rejection(),
            _ => false,
        }
    }
}

/// Result type alias for revguard
pub type Result<T> = std::result::Result<T, ReviewGuardError>;
