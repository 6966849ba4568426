//! Structured errors
//!
//! Formatters never fail. The only fallible operations are looking up a
//! format id and building a registry from user-supplied configuration.

use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INVALID_TIME_ZONE: &str = "INVALID_TIME_ZONE";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

/// Error type for registry lookups and configuration
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FormatError {
    /// No table entry and no custom `key:sub` form matched the id
    #[error("unknown format id: {id}")]
    NotFound {
        id: String,
        /// Similar known ids, best match first
        #[serde(skip_serializing_if = "Vec::is_empty")]
        suggestions: Vec<String>,
    },

    #[error("invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FormatError {
    pub fn not_found(id: impl Into<String>) -> Self {
        FormatError::NotFound { id: id.into(), suggestions: Vec::new() }
    }

    /// Builder: attach suggestions to a `NotFound` error
    pub fn with_suggestions(self, suggestions: Vec<String>) -> Self {
        match self {
            FormatError::NotFound { id, .. } => FormatError::NotFound { id, suggestions },
            other => other,
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::NotFound { .. } => codes::NOT_FOUND,
            FormatError::InvalidTimeZone(_) => codes::INVALID_TIME_ZONE,
            FormatError::InvalidConfig(_) => codes::INVALID_CONFIG,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FormatError::NotFound { .. })
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            FormatError::NotFound { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}
