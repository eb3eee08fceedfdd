//! Error types for Prewarm
//!
//! All modules use `PrewarmResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Prewarm operations
pub type PrewarmResult<T> = Result<T, PrewarmError>;

/// All errors that can occur in Prewarm
#[derive(Error, Debug)]
pub enum PrewarmError {
    // Warmer errors
    #[error("Cache warmer \"{0}\" does not exist.")]
    WarmerNotFound(String),

    #[error("Duplicate cache warmer name: {0}")]
    DuplicateWarmer(String),

    #[error("Cache warmer \"{warmer}\" failed: {source}")]
    WarmerFailed {
        warmer: String,
        #[source]
        source: Box<PrewarmError>,
    },

    #[error("Cache warmup failed for {count} warmer(s): {warmers}")]
    WarmersFailed { count: usize, warmers: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    // Application definition errors
    #[error("Invalid route definition in {path}: {reason}")]
    RouteInvalid { path: PathBuf, reason: String },

    #[error("Invalid service definition in {path}: {reason}")]
    ServiceInvalid { path: PathBuf, reason: String },

    #[error("Service dependency cycle involving \"{0}\"")]
    ServiceCycle(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl PrewarmError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Wrap a warmer's error with the warmer name
    pub fn warmer_failed(warmer: impl Into<String>, source: PrewarmError) -> Self {
        Self::WarmerFailed {
            warmer: warmer.into(),
            source: Box::new(source),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::WarmerNotFound(_) => Some("Run: prewarm list"),
            Self::ConfigNotFound(_) => Some("Run: prewarm init"),
            Self::ServiceCycle(_) => Some("Check the deps entries in your service definitions"),
            _ => None,
        }
    }
}
