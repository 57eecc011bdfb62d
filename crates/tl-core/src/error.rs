//! Core error types for TrackLink RS

use thiserror::Error;

use crate::config::ConfigError;

/// Core error type for all query operations
#[derive(Error, Debug)]
pub enum TlError {
    #[error("Malformed query: no '?' separator in {query:?}")]
    MalformedQuery { query: String },

    #[error("Not found: parameter {name}")]
    ParamNotFound { name: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TlError {
    pub fn malformed(query: impl Into<String>) -> Self {
        Self::MalformedQuery {
            query: query.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ParamNotFound { name: name.into() }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TlError::MalformedQuery { .. } => "malformed_query",
            TlError::ParamNotFound { .. } => "param_not_found",
            TlError::Config(_) => "configuration_error",
        }
    }

    /// Whether the error only means "nothing to read here"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TlError::MalformedQuery { .. } | TlError::ParamNotFound { .. }
        )
    }
}
