//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for omni-deals operations
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog source errors (unreadable file, unusable payload)
    #[error("Catalog source error: {message}")]
    Source {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a source error tied to a catalog path
    pub fn source_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Source {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a source error wrapping the underlying IO failure
    pub fn source_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Source {
            message: format!("failed to read {}", path.display()),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
