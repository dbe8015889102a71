//! Error types for the cache engine

use std::fmt;

/// Unified error type for interception operations.
///
/// The engine surfaces exactly one failure mode to callers: a network error
/// on the cache-miss path. Cache-write problems and background revalidation
/// failures are swallowed where they occur.
#[derive(Debug)]
pub enum EngineError {
    /// HTTP request failed (connection error, body read aborted, etc.)
    Network(reqwest::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Network(e) => write!(f, "Network error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Network(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        EngineError::Network(err)
    }
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
